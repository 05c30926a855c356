//! Field normalization for schedule rows.
//!
//! Both helpers are purely textual: no time parsing, no closed set of
//! teaching methods. Unexpected input is passed through, never rejected.

use crate::models::SessionType;

/// Split a slot like `"09:00-11:50"` into start and end.
///
/// - blank input gives two empty strings
/// - the first `-` splits; both halves are trimmed
/// - if either half ends up empty, or there is no `-`, the whole trimmed
///   slot is returned as both start and end
///
/// # Example
/// ```
/// use schedule_converter::parse_time_slot;
///
/// assert_eq!(parse_time_slot("09:00-11:50"), ("09:00".to_string(), "11:50".to_string()));
/// assert_eq!(parse_time_slot("13:00"), ("13:00".to_string(), "13:00".to_string()));
/// ```
pub fn parse_time_slot(slot: &str) -> (String, String) {
    let slot = slot.trim();
    if slot.is_empty() {
        return (String::new(), String::new());
    }

    if let Some((start, end)) = slot.split_once('-') {
        let (start, end) = (start.trim(), end.trim());
        if !start.is_empty() && !end.is_empty() {
            return (start.to_string(), end.to_string());
        }
    }

    (slot.to_string(), slot.to_string())
}

/// Map a teaching method label to its template type code.
///
/// `LEC` and `LAB` keep their code, `TUTORIALS` becomes `TUT`, anything
/// else is returned uppercased and trimmed.
pub fn classify_session_type(method: &str) -> String {
    SessionType::from_method(method).code().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(start: &str, end: &str) -> (String, String) {
        (start.to_string(), end.to_string())
    }

    #[test]
    fn test_slot_with_range() {
        assert_eq!(parse_time_slot("09:00-11:50"), pair("09:00", "11:50"));
        assert_eq!(parse_time_slot("  08:00 - 09:15 "), pair("08:00", "09:15"));
    }

    #[test]
    fn test_blank_slot() {
        assert_eq!(parse_time_slot(""), pair("", ""));
        assert_eq!(parse_time_slot("   \t"), pair("", ""));
    }

    #[test]
    fn test_slot_without_separator() {
        assert_eq!(parse_time_slot("13:00"), pair("13:00", "13:00"));
        assert_eq!(parse_time_slot(" TBA "), pair("TBA", "TBA"));
    }

    #[test]
    fn test_slot_with_one_sided_separator_falls_back() {
        assert_eq!(parse_time_slot("09:00-"), pair("09:00-", "09:00-"));
        assert_eq!(parse_time_slot("- 11:50"), pair("- 11:50", "- 11:50"));
        assert_eq!(parse_time_slot("-"), pair("-", "-"));
    }

    #[test]
    fn test_slot_splits_on_first_dash_only() {
        assert_eq!(parse_time_slot("09:00-10:00-11:00"), pair("09:00", "10:00-11:00"));
    }

    #[test]
    fn test_session_type_codes() {
        assert_eq!(classify_session_type("lec"), "LEC");
        assert_eq!(classify_session_type("LAB"), "LAB");
        assert_eq!(classify_session_type("Tutorials"), "TUT");
        assert_eq!(classify_session_type(" tutorials\n"), "TUT");
    }

    #[test]
    fn test_session_type_passthrough() {
        assert_eq!(classify_session_type("SEM"), "SEM");
        assert_eq!(classify_session_type(" seminar "), "SEMINAR");
        assert_eq!(classify_session_type(""), "");
    }
}
