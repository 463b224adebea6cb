pub mod admin_sessions;
pub mod reservations;
pub mod time_slots;
