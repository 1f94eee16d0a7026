use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Date stamp used in export filenames, e.g. `20260806`.
pub fn filename_stamp(tz: &Tz) -> String {
    now_in_timezone(tz).format("%Y%m%d").to_string()
}
