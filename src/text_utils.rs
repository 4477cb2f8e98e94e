use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Accepts `2024-01-15`, `2024-01-15 10:42:32.123` and RFC 3339 timestamps.
/// Only the calendar date, as written, is kept.
pub fn parse_post_date(buf: &str) -> Result<NaiveDate, String> {
    lazy_static! {
        static ref DATE_REGEX: Regex = Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[T ]\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?)?$"
        ).unwrap();
    }

    let buf = buf.trim();
    let Some(caps) = DATE_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date {}", buf));
    };

    let y: i32 = to_int(&caps[1], buf)?;
    let m: u32 = to_int(&caps[2], buf)?;
    let d: u32 = to_int(&caps[3], buf)?;

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| format!("Invalid calendar date {}", buf))
}

/// `January 15`
pub fn format_month_day(date: &NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

/// `Jan 15, 2024`
pub fn format_short_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// RFC 1123 in GMT, e.g. `Mon, 15 Jan 2024 00:00:00 GMT`
pub fn format_http_date(date_time: &NaiveDateTime) -> String {
    date_time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_post_date() {
        assert_eq!(parse_post_date("2024-01-15").unwrap(), ymd(2024, 1, 15));
        assert_eq!(parse_post_date(" 2024-3-5 ").unwrap(), ymd(2024, 3, 5));
        assert_eq!(parse_post_date("2017-09-10 10:42:32.123").unwrap(), ymd(2017, 9, 10));
        assert_eq!(parse_post_date("2017-09-10T23:42:32Z").unwrap(), ymd(2017, 9, 10));
        assert_eq!(parse_post_date("2017-09-10T23:42:32+02:00").unwrap(), ymd(2017, 9, 10));
    }

    #[test]
    fn test_parse_post_date_rejects_garbage() {
        assert!(parse_post_date("yesterday").is_err());
        assert!(parse_post_date("2024-02-30").is_err());
        assert!(parse_post_date("2024-01-15 and more").is_err());
    }

    #[test]
    fn test_formats() {
        let date = ymd(2024, 1, 5);
        assert_eq!(format_month_day(&date), "January 5");
        assert_eq!(format_short_date(&date), "Jan 5, 2024");
        let dt = date.and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_http_date(&dt), "Fri, 05 Jan 2024 00:00:00 GMT");
    }
}
