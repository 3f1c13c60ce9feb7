//! Work done once the whole page has loaded.

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Class added to `<body>` on window load.
pub const LOADED_CLASS: &str = "loaded";

/// Text for the copyright year element.
pub fn copyright_year<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.year().to_string()
}

/// [`copyright_year`] for the local clock.
pub fn current_copyright_year() -> String {
    copyright_year(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_copyright_year() {
        let now = Utc.with_ymd_and_hms(2031, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(copyright_year(&now), "2031");
    }
}
