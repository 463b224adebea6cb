mod requests;
mod responses;

use crate::{
    database::get_db_conn,
    error::BookingError,
    models::{
        reservations::{NewReservation, ReservationData, RESERVATION_STATUS_CONFIRMED},
        time_slots::TimeSlotData,
    },
    notify::{BookingNotice, LineNotifier, NotifyError},
    protocol::SimpleResponse,
    validate::validate_contact,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use diesel::prelude::*;
use uuid::Uuid;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search_slot).service(book).service(cancel);
}

crate::post_funcs! {
    (search_slot, "/search_slot", SearchSlotRequest, SearchSlotResponse),
    (cancel, "/cancel", CancelRequest, SimpleResponse),
}

/// Flips `is_available` to false only if it is still true. Zero updated
/// rows means the slot is taken or gone, and the caller lost the race.
pub(crate) fn claim_slot(conn: &SqliteConnection, slot_id: &str) -> QueryResult<usize> {
    use crate::schema::time_slots;

    diesel::update(
        time_slots::table
            .filter(time_slots::id.eq(slot_id))
            .filter(time_slots::is_available.eq(true)),
    )
    .set(time_slots::is_available.eq(false))
    .execute(conn)
}

pub(crate) fn release_slot(conn: &SqliteConnection, slot_id: &str) -> QueryResult<usize> {
    use crate::schema::time_slots;

    diesel::update(time_slots::table.filter(time_slots::id.eq(slot_id)))
        .set(time_slots::is_available.eq(true))
        .execute(conn)
}

#[post("/book")]
async fn book(
    pool: web::Data<DbPool>,
    notifier: web::Data<LineNotifier>,
    info: web::Json<BookRequest>,
) -> impl Responder {
    let response = match book_impl(pool, notifier, info).await {
        Ok(response) => response,
        Err(err) => BookResponse::err(err.to_string()),
    };
    HttpResponse::Ok().json(response)
}

async fn book_impl(
    pool: web::Data<DbPool>,
    notifier: web::Data<LineNotifier>,
    info: web::Json<BookRequest>,
) -> anyhow::Result<BookResponse> {
    use crate::schema::{reservations, time_slots};

    let info = info.into_inner();
    validate_contact(&info.student_name, &info.student_email, &info.student_phone)?;

    tracing::debug!(
        "booking slot {} ({} {} - {})",
        info.slot_id,
        info.date,
        info.start_time,
        info.end_time
    );

    let reservation = NewReservation {
        id: Uuid::new_v4().to_string(),
        slot_id: info.slot_id,
        student_name: info.student_name,
        parent_name: info.parent_name,
        student_email: info.student_email,
        student_phone: info.student_phone,
        message: info.message,
        status: RESERVATION_STATUS_CONFIRMED.to_string(),
        created_at: Local::now().naive_local(),
    };

    // the whole write path is one blocking unit; a dropped request cannot
    // stop between the claim and its reservation
    let conn = get_db_conn(&pool)?;
    let (slot, data) = web::block(move || -> anyhow::Result<(TimeSlotData, NewReservation)> {
        let slot = time_slots::table
            .filter(time_slots::id.eq(&reservation.slot_id))
            .first::<TimeSlotData>(&conn)
            .optional()
            .context("DB error")?;
        let slot = match slot {
            Some(slot) => slot,
            None => bail!(BookingError::SlotUnavailable),
        };

        let claimed = claim_slot(&conn, &reservation.slot_id).context("DB error")?;
        if claimed == 0 {
            bail!(BookingError::SlotUnavailable);
        }

        if let Err(err) = diesel::insert_into(reservations::table)
            .values(&reservation)
            .execute(&conn)
        {
            // claimed but not reserved, put the slot back before reporting
            if let Err(revert_err) = release_slot(&conn, &reservation.slot_id) {
                tracing::error!(
                    "slot {} left unavailable with no reservation, fix by hand: {}",
                    reservation.slot_id,
                    revert_err
                );
            }
            return Err(err).context("DB error");
        }
        Ok((slot, reservation))
    })
    .await?;

    let notice = BookingNotice {
        student_name: data.student_name.clone(),
        date: slot.date,
        start_time: slot.start_time,
        end_time: slot.end_time,
        student_phone: data.student_phone.clone(),
        student_email: data.student_email.clone(),
        message: data.message.clone(),
    };
    match notifier.push_booking_notice(&notice).await {
        Ok(()) => {}
        Err(NotifyError::NotConfigured) => {
            tracing::info!("LINE notification skipped: not configured");
        }
        Err(err) => {
            tracing::warn!("LINE notification failed: {}", err);
        }
    }

    Ok(BookResponse {
        success: true,
        err: "".to_string(),
        message: "予約が完了しました".to_string(),
        reservation: Some(ReservationItem {
            id: data.id,
            slot_id: data.slot_id,
            date: crate::utils::format_date_str(&slot.date),
            start_time: crate::utils::format_time_str(&slot.start_time),
            end_time: crate::utils::format_time_str(&slot.end_time),
            student_name: data.student_name,
            parent_name: data.parent_name.unwrap_or_default(),
            student_email: data.student_email,
            student_phone: data.student_phone,
            message: data.message.unwrap_or_default(),
            status: data.status,
            created_at: crate::utils::format_datetime_str(&data.created_at),
        }),
    })
}

async fn search_slot_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchSlotRequest>,
) -> anyhow::Result<SearchSlotResponse> {
    use crate::schema::time_slots;

    let info = info.into_inner();
    let first = match NaiveDate::from_ymd_opt(info.year, info.month, 1) {
        Some(date) => date,
        None => bail!("Invalid year or month"),
    };
    let next = if info.month == 12 {
        NaiveDate::from_ymd_opt(info.year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(info.year, info.month + 1, 1)
    };
    let next = match next {
        Some(date) => date,
        None => bail!("Invalid year or month"),
    };

    let conn = get_db_conn(&pool)?;
    let slots = web::block(move || {
        time_slots::table
            .filter(time_slots::date.ge(first))
            .filter(time_slots::date.lt(next))
            .filter(time_slots::is_available.eq(true))
            .order((time_slots::date.asc(), time_slots::start_time.asc()))
            .get_results::<TimeSlotData>(&conn)
    })
    .await
    .context("DB error")?;

    let slots = slots
        .into_iter()
        .map(|data| SlotItem {
            id: data.id,
            date: crate::utils::format_date_str(&data.date),
            start_time: crate::utils::format_time_str(&data.start_time),
            end_time: crate::utils::format_time_str(&data.end_time),
            is_available: data.is_available,
        })
        .collect();

    Ok(SearchSlotResponse {
        success: true,
        err: "".to_string(),
        slots,
    })
}

/// Looks up and deletes the reservation, then releases its slot, all in one
/// blocking unit. The delete decides the outcome. A release failure leaves
/// the slot unavailable with no reservation behind it, which is logged for
/// hand repair instead of failing a cancellation that already happened.
pub async fn cancel_reservation(
    pool: &web::Data<DbPool>,
    reservation_id: String,
) -> anyhow::Result<()> {
    use crate::schema::reservations;

    let conn = get_db_conn(pool)?;
    web::block(move || -> anyhow::Result<()> {
        let reservation = reservations::table
            .filter(reservations::id.eq(&reservation_id))
            .first::<ReservationData>(&conn)
            .optional()
            .context("DB error")?;
        let reservation = match reservation {
            Some(reservation) => reservation,
            None => bail!(BookingError::ReservationNotFound),
        };

        let deleted =
            diesel::delete(reservations::table.filter(reservations::id.eq(&reservation_id)))
                .execute(&conn)
                .context("DB error")?;
        // another cancel got here first
        if deleted == 0 {
            bail!(BookingError::ReservationNotFound);
        }

        if let Err(err) = release_slot(&conn, &reservation.slot_id) {
            tracing::error!(
                "failed to release slot {} after cancel: {}",
                reservation.slot_id,
                err
            );
        }
        Ok(())
    })
    .await?;

    Ok(())
}

async fn cancel_impl(
    pool: web::Data<DbPool>,
    info: web::Json<CancelRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    cancel_reservation(&pool, info.reservation_id).await?;
    Ok(SimpleResponse::ok())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::LineConfig;
    use crate::database::test_pool;
    use crate::models::time_slots::NewTimeSlot;

    pub(crate) fn insert_slot(pool: &DbPool, date: &str, start: &str, end: &str) -> String {
        use crate::schema::time_slots;

        let conn = pool.get().unwrap();
        let slot = NewTimeSlot {
            id: Uuid::new_v4().to_string(),
            date: crate::utils::parse_date_str(date).unwrap(),
            start_time: crate::utils::parse_time_str(start).unwrap(),
            end_time: crate::utils::parse_time_str(end).unwrap(),
            is_available: true,
            created_at: Local::now().naive_local(),
        };
        diesel::insert_into(time_slots::table)
            .values(&slot)
            .execute(&conn)
            .unwrap();
        slot.id
    }

    pub(crate) fn slot_available(pool: &DbPool, slot_id: &str) -> bool {
        use crate::schema::time_slots;

        let conn = pool.get().unwrap();
        time_slots::table
            .filter(time_slots::id.eq(slot_id))
            .first::<TimeSlotData>(&conn)
            .unwrap()
            .is_available
    }

    fn reservation_count(pool: &DbPool, slot_id: &str) -> i64 {
        use crate::schema::reservations;

        let conn = pool.get().unwrap();
        reservations::table
            .filter(reservations::slot_id.eq(slot_id))
            .count()
            .get_result(&conn)
            .unwrap()
    }

    fn offline_notifier() -> web::Data<LineNotifier> {
        web::Data::new(LineNotifier::new(LineConfig {
            access_token: None,
            user_id: None,
        }))
    }

    fn book_request(slot_id: &str) -> BookRequest {
        BookRequest {
            slot_id: slot_id.to_string(),
            date: "".to_string(),
            start_time: "".to_string(),
            end_time: "".to_string(),
            student_name: "山田花子".to_string(),
            parent_name: Some("山田太郎".to_string()),
            student_email: "hanako@example.com".to_string(),
            student_phone: "090-1234-5678".to_string(),
            message: None,
        }
    }

    #[actix_rt::test]
    async fn books_an_available_slot() {
        let (_dir, pool) = test_pool();
        let slot_id = insert_slot(&pool, "2025-03-03", "10:00", "10:45");
        let data = web::Data::new(pool.clone());

        let res = book_impl(data, offline_notifier(), web::Json(book_request(&slot_id)))
            .await
            .unwrap();
        assert!(res.success);
        assert_eq!(res.message, "予約が完了しました");
        let reservation = res.reservation.unwrap();
        assert_eq!(reservation.slot_id, slot_id);
        assert_eq!(reservation.status, "confirmed");
        assert_eq!(reservation.date, "2025-03-03");
        assert_eq!(reservation.start_time, "10:00");
        assert_eq!(reservation.end_time, "10:45");

        assert!(!slot_available(&pool, &slot_id));
        assert_eq!(reservation_count(&pool, &slot_id), 1);
    }

    #[actix_rt::test]
    async fn double_booking_reports_slot_unavailable() {
        let (_dir, pool) = test_pool();
        let slot_id = insert_slot(&pool, "2025-03-03", "10:00", "10:45");
        let data = web::Data::new(pool.clone());

        book_impl(
            data.clone(),
            offline_notifier(),
            web::Json(book_request(&slot_id)),
        )
        .await
        .unwrap();
        let err = book_impl(data, offline_notifier(), web::Json(book_request(&slot_id)))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("この時間枠は既に予約されています。"));
        assert_eq!(reservation_count(&pool, &slot_id), 1);
    }

    #[actix_rt::test]
    async fn booking_a_missing_slot_reports_slot_unavailable() {
        let (_dir, pool) = test_pool();
        let data = web::Data::new(pool);

        let err = book_impl(
            data,
            offline_notifier(),
            web::Json(book_request("no-such-slot")),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("この時間枠は既に予約されています。"));
    }

    #[actix_rt::test]
    async fn rejects_bad_phone_before_touching_the_slot() {
        let (_dir, pool) = test_pool();
        let slot_id = insert_slot(&pool, "2025-03-03", "10:00", "10:45");
        let data = web::Data::new(pool.clone());

        let mut request = book_request(&slot_id);
        request.student_phone = "abc".to_string();
        let err = book_impl(data, offline_notifier(), web::Json(request))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "電話番号は数字とハイフンのみで入力してください"
        );
        assert!(slot_available(&pool, &slot_id));
        assert_eq!(reservation_count(&pool, &slot_id), 0);
    }

    #[actix_rt::test]
    async fn cancel_releases_the_slot_and_is_not_repeatable() {
        let (_dir, pool) = test_pool();
        let slot_id = insert_slot(&pool, "2025-03-03", "10:00", "10:45");
        let data = web::Data::new(pool.clone());

        let res = book_impl(
            data.clone(),
            offline_notifier(),
            web::Json(book_request(&slot_id)),
        )
        .await
        .unwrap();
        let reservation_id = res.reservation.unwrap().id;
        assert!(!slot_available(&pool, &slot_id));

        cancel_reservation(&data, reservation_id.clone())
            .await
            .unwrap();
        assert!(slot_available(&pool, &slot_id));
        assert_eq!(reservation_count(&pool, &slot_id), 0);

        let err = cancel_reservation(&data, reservation_id).await.unwrap_err();
        assert!(err.to_string().contains("Reservation not found"));
    }

    #[test]
    fn only_one_claim_wins_a_contested_slot() {
        let (_dir, pool) = test_pool();
        let slot_id = insert_slot(&pool, "2025-03-03", "10:00", "10:45");

        let mut handles = Vec::new();
        for _ in 0..8 {
            let pool = pool.clone();
            let slot_id = slot_id.clone();
            handles.push(std::thread::spawn(move || {
                let conn = pool.get().unwrap();
                claim_slot(&conn, &slot_id).unwrap()
            }));
        }
        let won: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(won, 1);
        assert!(!slot_available(&pool, &slot_id));
    }

    #[actix_rt::test]
    async fn abandoned_booking_never_strands_a_claimed_slot() {
        let (_dir, pool) = test_pool();
        let slot_id = insert_slot(&pool, "2025-03-03", "10:00", "10:45");
        let data = web::Data::new(pool.clone());

        {
            // one poll submits the write unit, then the request goes away
            // mid-flight
            let fut = book_impl(data, offline_notifier(), web::Json(book_request(&slot_id)));
            futures::pin_mut!(fut);
            let _ = futures::poll!(&mut fut);
        }

        // once submitted, the unit finishes on the blocking pool
        for _ in 0..50 {
            let claimed = !slot_available(&pool, &slot_id);
            let reserved = reservation_count(&pool, &slot_id);
            if (claimed && reserved == 1) || (!claimed && reserved == 0) {
                break;
            }
            actix_rt::time::delay_for(std::time::Duration::from_millis(20)).await;
        }

        let claimed = !slot_available(&pool, &slot_id);
        let reserved = reservation_count(&pool, &slot_id);
        assert!(
            claimed == (reserved == 1),
            "slot left claimed with no reservation behind it"
        );
    }

    #[actix_rt::test]
    async fn failed_reservation_insert_releases_the_claim() {
        use diesel::connection::SimpleConnection;

        let (_dir, pool) = test_pool();
        let slot_id = insert_slot(&pool, "2025-03-03", "10:00", "10:45");
        {
            // take the insert target away so the claim has to be reverted
            let conn = pool.get().unwrap();
            conn.batch_execute("DROP TABLE reservations;").unwrap();
        }
        let data = web::Data::new(pool.clone());

        let err = book_impl(data, offline_notifier(), web::Json(book_request(&slot_id)))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("DB error"));
        assert!(slot_available(&pool, &slot_id));
    }

    #[actix_rt::test]
    async fn month_search_lists_available_slots_in_calendar_order() {
        let (_dir, pool) = test_pool();
        insert_slot(&pool, "2025-03-10", "14:00", "14:45");
        insert_slot(&pool, "2025-03-10", "10:00", "10:45");
        let taken = insert_slot(&pool, "2025-03-05", "09:00", "09:45");
        insert_slot(&pool, "2025-04-01", "10:00", "10:45");
        {
            let conn = pool.get().unwrap();
            claim_slot(&conn, &taken).unwrap();
        }
        let data = web::Data::new(pool);

        let res = search_slot_impl(
            data,
            web::Json(SearchSlotRequest {
                year: 2025,
                month: 3,
            }),
        )
        .await
        .unwrap();
        let listed: Vec<_> = res
            .slots
            .iter()
            .map(|slot| (slot.date.as_str(), slot.start_time.as_str()))
            .collect();
        assert_eq!(
            listed,
            vec![("2025-03-10", "10:00"), ("2025-03-10", "14:00")]
        );
    }

    #[actix_rt::test]
    async fn month_search_handles_december_and_bad_months() {
        let (_dir, pool) = test_pool();
        insert_slot(&pool, "2025-12-31", "10:00", "10:45");
        insert_slot(&pool, "2026-01-01", "10:00", "10:45");
        let data = web::Data::new(pool);

        let res = search_slot_impl(
            data.clone(),
            web::Json(SearchSlotRequest {
                year: 2025,
                month: 12,
            }),
        )
        .await
        .unwrap();
        assert_eq!(res.slots.len(), 1);
        assert_eq!(res.slots[0].date, "2025-12-31");

        let err = search_slot_impl(
            data,
            web::Json(SearchSlotRequest {
                year: 2025,
                month: 13,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid year or month");
    }
}
