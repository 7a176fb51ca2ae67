use {
    chrono::{DateTime, Local, TimeZone, Utc},
    std::{sync::LazyLock, time::Duration},
};

/// Frame-clock instant (monotonic).
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    pub const STANDARD_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    /// 12-hour clock with seconds. The zone is appended by `format_local_clock`.
    pub const CLOCK_FORMAT: &str = "%I:%M:%S %p";

    /// Local calendar date for an epoch timestamp, or empty if the timestamp is out of range.
    pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
        match Local.timestamp_millis_opt(epoch_ms).single() {
            Some(dt) => dt.format(Self::STANDARD_DATE_FORMAT).to_string(),
            None => String::new(),
        }
    }
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

static LOCAL_ZONE: LazyLock<Option<String>> = LazyLock::new(|| match iana_time_zone::get_timezone() {
    Ok(zone) => Some(zone),
    Err(e) => {
        log::warn!("Could not resolve the local time zone name, showing the UTC offset: {}", e);
        None
    }
});

/// IANA name of the system time zone (e.g. `Europe/Berlin`), resolved once.
pub fn local_zone_name() -> Option<&'static str> {
    LOCAL_ZONE.as_deref()
}

/// `"02:05:09 PM (Europe/Berlin)"`, or `"02:05:09 PM (UTC+02:00)"` when no zone name is known.
pub fn format_local_clock<Tz: TimeZone>(now: &DateTime<Tz>, zone: Option<&str>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let time = now.format(TimeUtils::CLOCK_FORMAT);
    match zone {
        Some(zone) => format!("{} ({})", time, zone),
        None => format!("{} (UTC{})", time, now.format("%:z")),
    }
}

pub fn format_local_date_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format(TimeUtils::STANDARD_DATE_TIME_FORMAT)
        .to_string()
}

/// Coarse countdown such as `"972d 5h 20m"`; drops leading zero units.
pub fn format_duration(duration: Duration) -> String {
    let mins_total = duration.as_secs() / 60;
    let days = mins_total / (24 * 60);
    let hours = (mins_total % (24 * 60)) / 60;
    let mins = mins_total % 60;
    if days > 0 {
        format!("{}d {}h {}m", days, hours, mins)
    } else if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn clock_shows_the_zone_name() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = tz.with_ymd_and_hms(2024, 4, 20, 14, 5, 9).unwrap();
        assert_eq!(format_local_clock(&at, Some("Europe/Berlin")), "02:05:09 PM (Europe/Berlin)");
    }

    #[test]
    fn clock_falls_back_to_the_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = tz.with_ymd_and_hms(2024, 4, 20, 14, 5, 9).unwrap();
        assert_eq!(format_local_clock(&at, None), "02:05:09 PM (UTC+02:00)");

        let utc = Utc.with_ymd_and_hms(2024, 4, 20, 0, 0, 1).unwrap();
        assert_eq!(format_local_clock(&utc, None), "12:00:01 AM (UTC+00:00)");
    }

    #[test]
    fn durations_drop_leading_zero_units() {
        assert_eq!(format_duration(Duration::from_secs(84_000_000)), "972d 5h 20m");
        assert_eq!(format_duration(Duration::from_secs(3 * 3600 + 59)), "3h 0m");
        assert_eq!(format_duration(Duration::from_secs(600)), "10m");
        assert_eq!(format_duration(Duration::ZERO), "0m");
    }

    #[test]
    fn out_of_range_timestamps_render_empty() {
        assert_eq!(TimeUtils::epoch_ms_to_date_string(i64::MAX), "");
        assert_eq!(TimeUtils::epoch_ms_to_date_string(0).len(), 10);
    }
}
