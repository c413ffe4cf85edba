use crate::config::MAX_DUE_HOURS;

/// Validate that a task title is not empty
pub fn validate_task_title(title: &str) -> bool {
    !title.trim().is_empty()
}

/// Trim a task title, returning None when nothing is left
pub fn normalize_task_title(title: &str) -> Option<String> {
    if validate_task_title(title) {
        Some(title.trim().to_string())
    } else {
        None
    }
}

/// Parse the optional "due in N hours" field of the add-task modal.
///
/// Blank means no due date. Otherwise a whole number of hours from now,
/// at least one and at most `MAX_DUE_HOURS`.
pub fn parse_due_hours(input: &str) -> Result<Option<u32>, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let hours: u32 = input.parse().map_err(|_| "Hours must be a whole number")?;
    if hours == 0 {
        return Err("The deed needs at least an hour");
    }
    if hours > MAX_DUE_HOURS {
        return Err("No more than thirty nights ahead");
    }
    Ok(Some(hours))
}

/// Clamp a volume to the [0, 1] range. NaN becomes silence.
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_task_title_empty() {
        assert!(!validate_task_title(""));
        assert!(!validate_task_title("   "));
        assert!(!validate_task_title("\t\n"));
    }

    #[test]
    fn test_validate_task_title_valid() {
        assert!(validate_task_title("Brew the potion"));
        assert!(validate_task_title("a"));
        assert!(validate_task_title("  trimmed  ")); // Has content after trim
    }

    #[test]
    fn test_normalize_task_title() {
        assert_eq!(
            normalize_task_title("  Seal the crypt "),
            Some("Seal the crypt".to_string())
        );
        assert_eq!(normalize_task_title(" "), None);
    }

    #[test]
    fn test_parse_due_hours() {
        assert_eq!(parse_due_hours(""), Ok(None));
        assert_eq!(parse_due_hours("  "), Ok(None));
        assert_eq!(parse_due_hours("12"), Ok(Some(12)));
        assert_eq!(parse_due_hours(" 3 "), Ok(Some(3)));
        assert!(parse_due_hours("0").is_err());
        assert!(parse_due_hours("soon").is_err());
        assert!(parse_due_hours("-4").is_err());
        assert!(parse_due_hours(&(MAX_DUE_HOURS + 1).to_string()).is_err());
        assert_eq!(
            parse_due_hours(&MAX_DUE_HOURS.to_string()),
            Ok(Some(MAX_DUE_HOURS))
        );
    }

    #[test]
    fn test_clamp_volume() {
        assert_eq!(clamp_volume(0.4), 0.4);
        assert_eq!(clamp_volume(-1.0), 0.0);
        assert_eq!(clamp_volume(3.0), 1.0);
        assert_eq!(clamp_volume(f32::NAN), 0.0);
    }
}
