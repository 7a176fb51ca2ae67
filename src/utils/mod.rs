mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, format_duration, format_local_clock, format_local_date_time, local_zone_name,
    now_utc,
};
