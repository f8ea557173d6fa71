//! Timestamps and the date-time format used by makeup session forms.

use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

/// The format of `<input type="datetime-local">` values, e.g. "2025-06-01T10:00".
const FORM_DATE_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// The same as [FORM_DATE_TIME_FORMAT] but with seconds, used for JSON output.
const DATE_TIME_WITH_SECONDS_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const DISPLAY_DATE_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// The current UTC time truncated to whole seconds.
pub fn now_utc() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();

    now.replace_nanosecond(0).unwrap_or(now)
}

/// Parse a date-time in the form `YYYY-MM-DDTHH:MM`, optionally followed by `:SS`.
pub fn parse_date_time(text: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    PrimitiveDateTime::parse(text, FORM_DATE_TIME_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(text, DATE_TIME_WITH_SECONDS_FORMAT))
}

/// Format a date-time as the value of a `datetime-local` input.
pub fn format_form_date_time(date_time: PrimitiveDateTime) -> String {
    date_time
        .format(FORM_DATE_TIME_FORMAT)
        .unwrap_or_else(|_| date_time.to_string())
}

/// Format a date-time for display in a table.
pub fn format_display_date_time(date_time: PrimitiveDateTime) -> String {
    date_time
        .format(DISPLAY_DATE_TIME_FORMAT)
        .unwrap_or_else(|_| date_time.to_string())
}

/// Format a record's creation time for display in a table.
pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    format_display_date_time(PrimitiveDateTime::new(timestamp.date(), timestamp.time()))
}

/// Serde adapter for schedule dates.
///
/// Accepts `YYYY-MM-DDTHH:MM` and `YYYY-MM-DDTHH:MM:SS`, writes the latter.
pub mod session_date {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::PrimitiveDateTime;

    use super::{DATE_TIME_WITH_SECONDS_FORMAT, parse_date_time};

    pub fn serialize<S>(date_time: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = date_time
            .format(DATE_TIME_WITH_SECONDS_FORMAT)
            .map_err(ser::Error::custom)?;

        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        parse_date_time(&text)
            .map_err(|error| de::Error::custom(format!("invalid date \"{text}\": {error}")))
    }
}
