use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct SlotItem {
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct SearchSlotResponse {
    pub success: bool,
    pub err: String,
    pub slots: Vec<SlotItem>,
}

#[derive(Debug, Default, Serialize)]
pub struct ReservationItem {
    pub id: String,
    pub slot_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub student_name: String,
    pub parent_name: String,
    pub student_email: String,
    pub student_phone: String,
    pub message: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Default, Serialize)]
pub struct BookResponse {
    pub success: bool,
    pub err: String,
    pub message: String,
    pub reservation: Option<ReservationItem>,
}

crate::impl_err_response! {
    SearchSlotResponse,
    BookResponse,
}
