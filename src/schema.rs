table! {
    admin_sessions (token) {
        token -> Text,
        created_at -> Timestamp,
    }
}

table! {
    reservations (id) {
        id -> Text,
        slot_id -> Text,
        student_name -> Text,
        parent_name -> Nullable<Text>,
        student_email -> Text,
        student_phone -> Text,
        message -> Nullable<Text>,
        status -> Text,
        created_at -> Timestamp,
    }
}

table! {
    time_slots (id) {
        id -> Text,
        date -> Date,
        start_time -> Time,
        end_time -> Time,
        is_available -> Bool,
        created_at -> Timestamp,
    }
}

allow_tables_to_appear_in_same_query!(admin_sessions, reservations, time_slots,);
