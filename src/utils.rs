#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

// Same shape as post_funcs!, with the session extractor in front so every
// generated admin handler rejects unauthenticated requests before its body
// is even parsed into the impl.
#[macro_export]
macro_rules! admin_post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    _session: crate::admin::guard::AdminSession,
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use chrono::format::ParseError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_date_str<S: AsRef<str>>(s: S) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s.as_ref(), "%Y-%m-%d")
}

/// Accepts "HH:MM" and "HH:MM:SS", the two shapes the admin console sends.
pub fn parse_time_str<S: AsRef<str>>(s: S) -> Result<NaiveTime, ParseError> {
    let s = s.as_ref();
    NaiveTime::parse_from_str(s, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
}

pub fn format_date_str(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_time_str(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn format_time_range(start_time: &NaiveTime, end_time: &NaiveTime) -> String {
    format!(
        "{} 〜 {}",
        format_time_str(start_time),
        format_time_str(end_time)
    )
}

pub fn format_datetime_str(time: &NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dates() {
        let date = parse_date_str("2025-02-03").unwrap();
        assert_eq!(format_date_str(&date), "2025-02-03");
        assert!(parse_date_str("2025/02/03").is_err());
        assert!(parse_date_str("not a date").is_err());
    }

    #[test]
    fn parses_times_with_and_without_seconds() {
        let short = parse_time_str("10:00").unwrap();
        let long = parse_time_str("10:00:00").unwrap();
        assert_eq!(short, long);
        assert_eq!(format_time_str(&short), "10:00");
        assert!(parse_time_str("25:00").is_err());
        assert!(parse_time_str("later").is_err());
    }

    #[test]
    fn formats_time_ranges_for_notices() {
        let start = parse_time_str("10:00").unwrap();
        let end = parse_time_str("10:45").unwrap();
        assert_eq!(format_time_range(&start, &end), "10:00 〜 10:45");
    }

    #[test]
    fn formats_timestamps() {
        let date = parse_date_str("2025-02-03").unwrap();
        let time = parse_time_str("09:30:15").unwrap();
        assert_eq!(
            format_datetime_str(&date.and_time(time)),
            "2025-02-03T09:30:15"
        );
    }
}
