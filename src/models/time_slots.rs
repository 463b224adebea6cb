use crate::schema::time_slots;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Queryable)]
pub struct TimeSlotData {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "time_slots"]
pub struct NewTimeSlot {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
}
