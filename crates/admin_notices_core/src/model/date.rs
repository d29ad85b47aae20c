//! Conversions accepted by the notice date window setters.

use crate::model::NoticeConfigError;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Values accepted by `AdminNotice::after`/`until`/`between`.
///
/// Strings are read as RFC 3339, `YYYY-MM-DD HH:MM:SS` (UTC) or
/// `YYYY-MM-DD` (UTC midnight). Integers are Unix epoch seconds.
pub trait IntoNoticeDate {
    fn into_notice_date(self) -> Result<OffsetDateTime, NoticeConfigError>;
}

impl IntoNoticeDate for OffsetDateTime {
    fn into_notice_date(self) -> Result<OffsetDateTime, NoticeConfigError> {
        Ok(self.to_offset(UtcOffset::UTC))
    }
}

impl IntoNoticeDate for i64 {
    fn into_notice_date(self) -> Result<OffsetDateTime, NoticeConfigError> {
        OffsetDateTime::from_unix_timestamp(self)
            .map_err(|_| NoticeConfigError::InvalidDate(self.to_string()))
    }
}

impl IntoNoticeDate for &str {
    fn into_notice_date(self) -> Result<OffsetDateTime, NoticeConfigError> {
        parse_date_str(self)
    }
}

impl IntoNoticeDate for String {
    fn into_notice_date(self) -> Result<OffsetDateTime, NoticeConfigError> {
        parse_date_str(&self)
    }
}

fn parse_date_str(value: &str) -> Result<OffsetDateTime, NoticeConfigError> {
    let trimmed = value.trim();

    if let Ok(parsed) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(parsed.to_offset(UtcOffset::UTC));
    }

    let date_time = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    if let Ok(parsed) = PrimitiveDateTime::parse(trimmed, &date_time) {
        return Ok(parsed.assume_utc());
    }

    let date_only = format_description!("[year]-[month]-[day]");
    if let Ok(parsed) = Date::parse(trimmed, &date_only) {
        return Ok(parsed.midnight().assume_utc());
    }

    Err(NoticeConfigError::InvalidDate(value.to_string()))
}
