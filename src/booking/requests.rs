use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchSlotRequest {
    pub year: i32,
    pub month: u32,
}

#[derive(Deserialize)]
pub struct BookRequest {
    pub slot_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    pub student_name: String,
    pub parent_name: Option<String>,
    pub student_email: String,
    pub student_phone: String,
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct CancelRequest {
    pub reservation_id: String,
}
