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
pub struct SearchSlotsResponse {
    pub success: bool,
    pub err: String,
    pub slots: Vec<SlotItem>,
}

#[derive(Debug, Default, Serialize)]
pub struct PlannedSlotItem {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Default, Serialize)]
pub struct PreviewSlotsResponse {
    pub success: bool,
    pub err: String,
    pub total: usize,
    pub slots: Vec<PlannedSlotItem>,
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
pub struct SearchReservationsResponse {
    pub success: bool,
    pub err: String,
    pub reservations: Vec<ReservationItem>,
}

crate::impl_err_response! {
    SearchSlotsResponse,
    PreviewSlotsResponse,
    SearchReservationsResponse,
}
