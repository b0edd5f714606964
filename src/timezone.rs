use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's date in the timezone named by `canonical_timezone`, e.g. "Pacific/Auckland".
///
/// Returns `None` if the timezone name is not a valid, canonical timezone.
pub fn local_today(canonical_timezone: &str) -> Option<Date> {
    get_local_offset(canonical_timezone)
        .map(|offset| OffsetDateTime::now_utc().to_offset(offset).date())
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::{get_local_offset, local_today};

    #[test]
    fn utc_has_zero_offset() {
        let offset = get_local_offset("Etc/UTC").unwrap();

        assert!(offset.is_utc());
    }

    #[test]
    fn invalid_timezone_returns_none() {
        assert_eq!(get_local_offset("Middle/Earth"), None);
        assert_eq!(local_today("Middle/Earth"), None);
    }

    #[test]
    fn local_today_in_utc_matches_utc_date() {
        let today = local_today("Etc/UTC").unwrap();

        // Guard against the test straddling midnight.
        let now = OffsetDateTime::now_utc().date();
        assert!(today == now || today.next_day() == Some(now));
    }
}
