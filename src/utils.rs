/// Validate latitude and longitude, collecting every violated bound into one
/// combined message instead of stopping at the first.
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), String> {
    let mut errors = Vec::new();
    if !(-90.0..=90.0).contains(&lat) {
        errors.push("Latitude must be between -90 and 90.");
    }
    if !(-180.0..=180.0).contains(&lon) {
        errors.push("Longitude must be between -180 and 180.");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_coordinates_within_bounds() {
        assert!(validate_coordinates(32.7767, -96.797).is_ok());
        assert!(validate_coordinates(-90.0, -180.0).is_ok());
        assert!(validate_coordinates(90.0, 180.0).is_ok());
        assert!(validate_coordinates(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_latitude_out_of_range() {
        let message = validate_coordinates(91.0, 0.0).unwrap_err();
        assert_eq!(message, "Latitude must be between -90 and 90.");
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        let message = validate_coordinates(0.0, 200.0).unwrap_err();
        assert_eq!(message, "Longitude must be between -180 and 180.");
    }

    #[test]
    fn aggregates_both_violations() {
        let message = validate_coordinates(91.0, 200.0).unwrap_err();
        assert_eq!(
            message,
            "Latitude must be between -90 and 90. Longitude must be between -180 and 180."
        );
    }
}
