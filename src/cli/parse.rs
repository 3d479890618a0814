use chrono::NaiveDate;
use tickoff_core::todo::grammar::parse_strict_date;
use tickoff_core::todo::InsertPosition;

/// Parse insert position from string
pub fn parse_position(s: &str) -> std::result::Result<InsertPosition, String> {
    s.parse::<InsertPosition>().map_err(|e| e.to_string())
}

/// Parse a strict `YYYY-MM-DD` day
pub fn parse_day(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_strict_date(s.trim()).ok_or_else(|| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}
