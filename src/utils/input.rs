/// Parse the leading integer of a form value the way browser number inputs
/// are usually read: optional sign, then digits, anything after is ignored.
/// Returns `None` when there are no leading digits or the value overflows.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude = rest[..digits_end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Read a yes/no answer; anything other than y/yes counts as no
pub fn parse_yes(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("90"), Some(90));
        assert_eq!(parse_leading_int("  45"), Some(45));
        assert_eq!(parse_leading_int("90min"), Some(90));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("2.5"), Some(2));

        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_yes() {
        assert!(parse_yes("y"));
        assert!(parse_yes(" YES "));
        assert!(!parse_yes(""));
        assert!(!parse_yes("nope"));
    }
}
