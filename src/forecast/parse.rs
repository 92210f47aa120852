use super::types::ForecastPeriod;

/// Limits periods to the requested day horizon. Periods are scanned in the
/// order the upstream returned them; a period is kept each time its calendar
/// date (first 10 characters of the start time) differs from the previous
/// period's, and the scan stops once `days * 2` day/night slots are filled.
pub fn filter_periods(periods: &[ForecastPeriod], days: u32) -> Vec<&ForecastPeriod> {
    let mut filtered = Vec::new();
    let mut current_day: Option<&str> = None;

    for period in periods {
        let day = period.start_time.get(..10).unwrap_or(&period.start_time);
        if current_day != Some(day) {
            current_day = Some(day);
            filtered.push(period);
            if filtered.len() >= (days as usize) * 2 {
                break;
            }
        }
    }

    tracing::info!("Filtered down to {} periods for summarization", filtered.len());
    filtered
}

/// Renders one period into one narrative sentence. Total: missing fields
/// fall back to "N/A" (name, temperature, wind) or an empty string (unit,
/// forecast text) instead of failing.
pub fn build_paragraph(period: &ForecastPeriod) -> String {
    let name = period.name.as_deref().unwrap_or("N/A");
    let temperature = period
        .temperature
        .map(|t| t.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let temperature_unit = period.temperature_unit.as_deref().unwrap_or("");
    let wind_speed = period.wind_speed.as_deref().unwrap_or("N/A");
    let wind_direction = period
        .wind_direction
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_else(|| "N/A".to_string());
    let short_forecast = period
        .short_forecast
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let detailed_forecast = period.detailed_forecast.as_deref().unwrap_or("");

    format!(
        "{}: The temperature will be {}°{} with {}. Winds are expected to be {} from the {}. {}",
        name, temperature, temperature_unit, short_forecast, wind_speed, wind_direction, detailed_forecast
    )
}

/// Concatenates every non-empty detailed forecast across the full period
/// list into one paragraph, one clause per period.
pub fn merge_detailed(periods: &[ForecastPeriod]) -> String {
    merge_forecasts(periods, |period| period.detailed_forecast.as_deref())
}

/// Same merge over the short forecast texts.
pub fn merge_short(periods: &[ForecastPeriod]) -> String {
    merge_forecasts(periods, |period| period.short_forecast.as_deref())
}

fn merge_forecasts<'a, F>(periods: &'a [ForecastPeriod], text: F) -> String
where
    F: Fn(&'a ForecastPeriod) -> Option<&'a str>,
{
    let mut merged = String::new();
    for period in periods {
        let number = match period.number {
            Some(number) => number,
            None => continue,
        };
        let forecast = text(period).unwrap_or("").trim();
        if forecast.is_empty() {
            continue;
        }
        merged.push_str(&format!("day {} forecast suggests {} ", number, forecast));
    }
    merged.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::mock;

    #[test]
    fn filter_stops_at_day_horizon() {
        // Ten periods on ten consecutive dates; days=3 keeps the first six.
        let periods: Vec<ForecastPeriod> = (0..10)
            .map(|i| {
                mock::period(
                    i + 1,
                    if i % 2 == 0 { "Day" } else { "Night" },
                    &format!("2025-01-{:02}T06:00:00-06:00", 10 + i),
                    "Sunny",
                    "Sunny with light winds.",
                )
            })
            .collect();

        let filtered = filter_periods(&periods, 3);

        assert_eq!(filtered.len(), 6);
        let numbers: Vec<i64> = filtered.iter().filter_map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]); // original order
    }

    #[test]
    fn filter_keeps_first_period_per_date() {
        let periods = vec![
            mock::period(1, "Today", "2025-01-10T06:00:00-06:00", "Sunny", "Sunny."),
            mock::period(2, "Tonight", "2025-01-10T18:00:00-06:00", "Clear", "Clear."),
            mock::period(3, "Saturday", "2025-01-11T06:00:00-06:00", "Rain", "Rain."),
            mock::period(4, "Saturday Night", "2025-01-11T18:00:00-06:00", "Rain", "Rain."),
        ];

        let filtered = filter_periods(&periods, 14);

        let numbers: Vec<i64> = filtered.iter().filter_map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn filter_handles_empty_input() {
        assert!(filter_periods(&[], 14).is_empty());
    }

    #[test]
    fn paragraph_substitutes_all_fields() {
        let period = mock::period(
            1,
            "Today",
            "2025-01-10T06:00:00-06:00",
            "Mostly Sunny",
            "Mostly sunny, with a high near 72.",
        );

        assert_eq!(
            build_paragraph(&period),
            "Today: The temperature will be 72°F with mostly sunny. \
             Winds are expected to be 10 mph from the sw. \
             Mostly sunny, with a high near 72."
        );
    }

    #[test]
    fn paragraph_defaults_missing_fields() {
        let period = ForecastPeriod {
            number: Some(1),
            name: None,
            start_time: "2025-01-10T06:00:00-06:00".to_string(),
            temperature: None,
            temperature_unit: None,
            wind_speed: None,
            wind_direction: None,
            short_forecast: None,
            detailed_forecast: None,
        };

        let paragraph = build_paragraph(&period);

        assert_eq!(
            paragraph,
            "N/A: The temperature will be N/A° with . Winds are expected to be N/A from the N/A. "
        );
    }

    #[test]
    fn merge_detailed_skips_empty_forecasts() {
        let periods = vec![
            mock::period(1, "Today", "2025-01-10T06:00:00-06:00", "Sunny", "Sunny"),
            mock::period(2, "Tonight", "2025-01-10T18:00:00-06:00", "Clear", ""),
            mock::period(3, "Saturday", "2025-01-11T06:00:00-06:00", "Rain", "Rain"),
        ];

        assert_eq!(
            merge_detailed(&periods),
            "day 1 forecast suggests Sunny day 3 forecast suggests Rain"
        );
    }

    #[test]
    fn merge_short_uses_short_forecasts() {
        let periods = vec![
            mock::period(1, "Today", "2025-01-10T06:00:00-06:00", "Mostly Sunny", "Long text"),
            mock::period(2, "Tonight", "2025-01-10T18:00:00-06:00", "Clear", "Long text"),
        ];

        assert_eq!(
            merge_short(&periods),
            "day 1 forecast suggests Mostly Sunny day 2 forecast suggests Clear"
        );
    }

    #[test]
    fn merge_skips_periods_without_number() {
        let mut period = mock::period(1, "Today", "2025-01-10T06:00:00-06:00", "Sunny", "Sunny");
        period.number = None;

        assert_eq!(merge_detailed(&[period]), "");
    }

    #[test]
    fn merge_trims_surrounding_whitespace() {
        let periods = vec![mock::period(
            1,
            "Today",
            "2025-01-10T06:00:00-06:00",
            "Sunny",
            "  Sunny with light winds.  ",
        )];

        assert_eq!(
            merge_detailed(&periods),
            "day 1 forecast suggests Sunny with light winds."
        );
    }
}
