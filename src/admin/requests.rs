use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Deserialize)]
pub struct AddSlotRequest {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Deserialize)]
pub struct DeleteSlotRequest {
    pub slot_id: String,
}

#[derive(Deserialize)]
pub struct SearchSlotsRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub available: Option<bool>,
}

#[derive(Deserialize)]
pub struct TimeRangeEntry {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Deserialize)]
pub struct BulkAddSlotsRequest {
    pub start_date: String,
    pub end_date: String,
    pub weekdays: Vec<u32>,
    pub time_ranges: Vec<TimeRangeEntry>,
}

#[derive(Deserialize)]
pub struct PreviewSlotsRequest {
    pub start_date: String,
    pub end_date: String,
    pub weekdays: Vec<u32>,
    pub time_ranges: Vec<TimeRangeEntry>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct BulkDeleteSlotsRequest {
    pub slot_ids: Vec<String>,
}

#[derive(Deserialize)]
pub struct SearchReservationsRequest {
    pub filter: Option<String>,
}

#[derive(Deserialize)]
pub struct CancelReservationRequest {
    pub reservation_id: String,
}
