use crate::schema::admin_sessions;
use chrono::NaiveDateTime;

#[derive(Queryable, Insertable)]
#[table_name = "admin_sessions"]
pub struct AdminSessionData {
    pub token: String,
    pub created_at: NaiveDateTime,
}
