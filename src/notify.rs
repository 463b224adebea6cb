use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::config::LineConfig;

const LINE_PUSH_URL: &str = "https://api.line.me/v2/bot/message/push";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("LINE credentials not configured")]
    NotConfigured,
    #[error("LINE push request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("LINE push rejected: {0}")]
    Api(reqwest::StatusCode),
}

pub struct BookingNotice {
    pub student_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub student_phone: String,
    pub student_email: String,
    pub message: Option<String>,
}

impl BookingNotice {
    pub fn to_text(&self) -> String {
        let mut lines = vec![
            "【予約通知】".to_string(),
            "".to_string(),
            "新しい振替レッスンの予約が入りました。".to_string(),
            "".to_string(),
            format!("■ 生徒名: {}", self.student_name),
            format!(
                "■ 日時: {} {}",
                crate::utils::format_date_str(&self.date),
                crate::utils::format_time_range(&self.start_time, &self.end_time)
            ),
            format!("■ 電話: {}", self.student_phone),
            format!("■ メール: {}", self.student_email),
        ];
        if let Some(message) = &self.message {
            lines.push(format!("■ メッセージ: {}", message));
        }
        lines.push("".to_string());
        lines.push("予約管理画面で確認してください。".to_string());
        lines.join("\n")
    }
}

/// Push channel to the instructor's LINE account. Booking goes through even
/// when this fails, so callers log errors instead of propagating them.
#[derive(Clone)]
pub struct LineNotifier {
    config: LineConfig,
    client: reqwest::Client,
}

impl LineNotifier {
    pub fn new(config: LineConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn push_booking_notice(&self, notice: &BookingNotice) -> Result<(), NotifyError> {
        let (token, to) = match (&self.config.access_token, &self.config.user_id) {
            (Some(token), Some(to)) => (token, to),
            _ => return Err(NotifyError::NotConfigured),
        };

        let body = serde_json::json!({
            "to": to,
            "messages": [{ "type": "text", "text": notice.to_text() }],
        });
        let res = self
            .client
            .post(LINE_PUSH_URL)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(NotifyError::Api(res.status()));
        }
        Ok(())
    }
}
