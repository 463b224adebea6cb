use chrono::NaiveTime;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::BookingError;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("bad email pattern");
    static ref PHONE_PATTERN: Regex = Regex::new(r"^[0-9-]+$").expect("bad phone pattern");
}

const MIN_PHONE_DIGITS: usize = 10;

pub fn validate_contact(name: &str, email: &str, phone: &str) -> Result<(), BookingError> {
    validate_student_name(name)?;
    validate_email(email)?;
    validate_phone(phone)?;
    Ok(())
}

pub fn validate_student_name(name: &str) -> Result<(), BookingError> {
    if name.trim().is_empty() {
        return Err(BookingError::Validation(
            "生徒名を入力してください".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), BookingError> {
    if email.trim().is_empty() {
        return Err(BookingError::Validation(
            "メールアドレスを入力してください".to_string(),
        ));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(BookingError::Validation(
            "有効なメールアドレスを入力してください".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), BookingError> {
    if phone.trim().is_empty() {
        return Err(BookingError::Validation(
            "電話番号を入力してください".to_string(),
        ));
    }
    if !PHONE_PATTERN.is_match(phone) {
        return Err(BookingError::Validation(
            "電話番号は数字とハイフンのみで入力してください".to_string(),
        ));
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < MIN_PHONE_DIGITS {
        return Err(BookingError::Validation(
            "有効な電話番号を入力してください".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_time_range(start_time: &NaiveTime, end_time: &NaiveTime) -> Result<(), BookingError> {
    if start_time >= end_time {
        return Err(BookingError::Validation("Invalid time interval".to_string()));
    }
    Ok(())
}
