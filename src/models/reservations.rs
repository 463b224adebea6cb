use crate::schema::reservations;
use chrono::NaiveDateTime;

#[derive(Queryable)]
pub struct ReservationData {
    pub id: String,
    pub slot_id: String,
    pub student_name: String,
    pub parent_name: Option<String>,
    pub student_email: String,
    pub student_phone: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "reservations"]
pub struct NewReservation {
    pub id: String,
    pub slot_id: String,
    pub student_name: String,
    pub parent_name: Option<String>,
    pub student_email: String,
    pub student_phone: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

pub const RESERVATION_STATUS_CONFIRMED: &str = "confirmed";
