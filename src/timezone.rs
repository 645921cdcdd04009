//! Resolves the host application's configured timezone into local time.

use time::OffsetDateTime;
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Get the current date-time in the timezone named by a canonical timezone
/// string, e.g. "Pacific/Auckland".
///
/// # Errors
/// Returns [Error::InvalidTimezone] if the string is not a canonical
/// timezone name.
pub fn local_now(canonical_timezone: &str) -> Result<OffsetDateTime, Error> {
    let now_utc = OffsetDateTime::now_utc();

    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|timezone| now_utc.to_offset(timezone.get_offset_utc(&now_utc).to_utc()))
        .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::local_now;

    #[test]
    fn resolves_canonical_timezone_names() {
        assert!(local_now("Etc/UTC").is_ok());
        assert!(local_now("Pacific/Auckland").is_ok());
    }

    #[test]
    fn rejects_unknown_timezone_names() {
        assert_eq!(
            local_now("Not/AZone"),
            Err(Error::InvalidTimezone("Not/AZone".to_owned()))
        );
    }
}
