mod guard;
mod requests;
mod responses;

use crate::{
    config::AppConfig,
    database::get_db_conn,
    models::{
        admin_sessions::AdminSessionData,
        reservations::ReservationData,
        time_slots::{NewTimeSlot, TimeSlotData},
    },
    protocol::{CountResponse, SimpleResponse},
    schedule::SlotSchedule,
    DbPool,
};
use actix_web::{http::header, post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use blake2::{Blake2b, Digest};
use chrono::Local;
use diesel::prelude::*;
use uuid::Uuid;

use self::{requests::*, responses::*};

const PREVIEW_LIMIT: usize = 50;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login)
        .service(logout)
        .service(add_slot)
        .service(delete_slot)
        .service(search_slots)
        .service(preview_slots)
        .service(bulk_add_slots)
        .service(bulk_delete_slots)
        .service(search_reservations)
        .service(cancel_reservation);
}

crate::admin_post_funcs! {
    (add_slot, "/add_slot", AddSlotRequest, SimpleResponse),
    (delete_slot, "/delete_slot", DeleteSlotRequest, SimpleResponse),
    (search_slots, "/search_slots", SearchSlotsRequest, SearchSlotsResponse),
    (preview_slots, "/preview_slots", PreviewSlotsRequest, PreviewSlotsResponse),
    (bulk_add_slots, "/bulk_add_slots", BulkAddSlotsRequest, CountResponse),
    (bulk_delete_slots, "/bulk_delete_slots", BulkDeleteSlotsRequest, CountResponse),
    (search_reservations, "/search_reservations", SearchReservationsRequest, SearchReservationsResponse),
    (cancel_reservation, "/cancel_reservation", CancelReservationRequest, SimpleResponse),
}

#[post("/login")]
async fn login(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    info: web::Json<LoginRequest>,
) -> impl Responder {
    match login_impl(pool, config, info).await {
        Ok(token) => HttpResponse::Ok()
            .header(
                header::SET_COOKIE,
                format!(
                    "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
                    guard::ADMIN_COOKIE,
                    token,
                    guard::SESSION_TTL_SECS
                ),
            )
            .json(SimpleResponse::ok()),
        Err(err) => HttpResponse::Ok().json(SimpleResponse::err(err.to_string())),
    }
}

async fn login_impl(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<String> {
    use crate::schema::admin_sessions;

    let info = info.into_inner();
    let expected = match &config.admin_password {
        Some(password) => password,
        None => bail!("ADMIN_PASSWORD is not configured"),
    };
    if info.password != *expected {
        bail!("Wrong password");
    }

    let token = format!(
        "{:x}",
        Blake2b::digest(format!("{}:{}", Uuid::new_v4(), Local::now()).as_bytes())
    );
    let data = AdminSessionData {
        token: token.clone(),
        created_at: Local::now().naive_local(),
    };
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(admin_sessions::table)
            .values(data)
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(token)
}

#[post("/logout")]
async fn logout(session: guard::AdminSession, pool: web::Data<DbPool>) -> impl Responder {
    match logout_impl(session, pool).await {
        Ok(()) => HttpResponse::Ok()
            .header(
                header::SET_COOKIE,
                format!(
                    "{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax",
                    guard::ADMIN_COOKIE
                ),
            )
            .json(SimpleResponse::ok()),
        Err(err) => HttpResponse::Ok().json(SimpleResponse::err(err.to_string())),
    }
}

async fn logout_impl(session: guard::AdminSession, pool: web::Data<DbPool>) -> anyhow::Result<()> {
    use crate::schema::admin_sessions;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(admin_sessions::table.filter(admin_sessions::token.eq(session.token)))
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(())
}

async fn add_slot_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddSlotRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::time_slots;

    let info = info.into_inner();
    let date = crate::utils::parse_date_str(&info.date).context("Wrong format on 'date'")?;
    let start_time =
        crate::utils::parse_time_str(&info.start_time).context("Wrong format on 'start_time'")?;
    let end_time =
        crate::utils::parse_time_str(&info.end_time).context("Wrong format on 'end_time'")?;
    crate::validate::validate_time_range(&start_time, &end_time)?;

    let data = NewTimeSlot {
        id: Uuid::new_v4().to_string(),
        date,
        start_time,
        end_time,
        is_available: true,
        created_at: Local::now().naive_local(),
    };
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(time_slots::table)
            .values(data)
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SimpleResponse::ok())
}

async fn delete_slot_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DeleteSlotRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::time_slots;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    // the availability filter keeps reserved slots out of reach
    let deleted = web::block(move || {
        diesel::delete(
            time_slots::table
                .filter(time_slots::id.eq(info.slot_id))
                .filter(time_slots::is_available.eq(true)),
        )
        .execute(&conn)
    })
    .await
    .context("DB error")?;

    if deleted == 0 {
        bail!("Slot is reserved or does not exist");
    }
    Ok(SimpleResponse::ok())
}

async fn search_slots_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchSlotsRequest>,
) -> anyhow::Result<SearchSlotsResponse> {
    use crate::schema::time_slots;

    let info = info.into_inner();
    let start_date = match &info.start_date {
        Some(s) => Some(crate::utils::parse_date_str(s).context("Wrong format on 'start_date'")?),
        None => None,
    };
    let end_date = match &info.end_date {
        Some(s) => Some(crate::utils::parse_date_str(s).context("Wrong format on 'end_date'")?),
        None => None,
    };
    let available = info.available;

    let conn = get_db_conn(&pool)?;
    let slots = web::block(move || {
        let mut query = time_slots::table.into_boxed();
        if let Some(start_date) = start_date {
            query = query.filter(time_slots::date.ge(start_date));
        }
        if let Some(end_date) = end_date {
            query = query.filter(time_slots::date.le(end_date));
        }
        if let Some(available) = available {
            query = query.filter(time_slots::is_available.eq(available));
        }
        query
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

    Ok(SearchSlotsResponse {
        success: true,
        err: "".to_string(),
        slots,
    })
}

fn parse_schedule(
    start_date: &str,
    end_date: &str,
    weekdays: &[u32],
    time_ranges: &[TimeRangeEntry],
) -> anyhow::Result<SlotSchedule> {
    let start_date =
        crate::utils::parse_date_str(start_date).context("Wrong format on 'start_date'")?;
    let end_date = crate::utils::parse_date_str(end_date).context("Wrong format on 'end_date'")?;
    let mut ranges = Vec::with_capacity(time_ranges.len());
    for entry in time_ranges {
        let start_time = crate::utils::parse_time_str(&entry.start_time)
            .context("Wrong format on 'start_time'")?;
        let end_time =
            crate::utils::parse_time_str(&entry.end_time).context("Wrong format on 'end_time'")?;
        ranges.push((start_time, end_time));
    }
    Ok(SlotSchedule::new(
        start_date,
        end_date,
        weekdays.to_vec(),
        ranges,
    )?)
}

async fn preview_slots_impl(
    _pool: web::Data<DbPool>,
    info: web::Json<PreviewSlotsRequest>,
) -> anyhow::Result<PreviewSlotsResponse> {
    let info = info.into_inner();
    let schedule = parse_schedule(
        &info.start_date,
        &info.end_date,
        &info.weekdays,
        &info.time_ranges,
    )?;

    let limit = info.limit.unwrap_or(PREVIEW_LIMIT).min(PREVIEW_LIMIT);
    let slots = schedule
        .iter()
        .take(limit)
        .map(|plan| PlannedSlotItem {
            date: crate::utils::format_date_str(&plan.date),
            start_time: crate::utils::format_time_str(&plan.start_time),
            end_time: crate::utils::format_time_str(&plan.end_time),
        })
        .collect();

    Ok(PreviewSlotsResponse {
        success: true,
        err: "".to_string(),
        total: schedule.total(),
        slots,
    })
}

async fn bulk_add_slots_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BulkAddSlotsRequest>,
) -> anyhow::Result<CountResponse> {
    use crate::schema::time_slots;

    let info = info.into_inner();
    let schedule = parse_schedule(
        &info.start_date,
        &info.end_date,
        &info.weekdays,
        &info.time_ranges,
    )?;

    let conn = get_db_conn(&pool)?;
    let count = web::block(move || -> anyhow::Result<usize> {
        let mut count = 0;
        for plan in schedule.iter() {
            let data = NewTimeSlot {
                id: Uuid::new_v4().to_string(),
                date: plan.date,
                start_time: plan.start_time,
                end_time: plan.end_time,
                is_available: true,
                created_at: Local::now().naive_local(),
            };
            match diesel::insert_into(time_slots::table)
                .values(data)
                .execute(&conn)
            {
                Ok(_) => count += 1,
                Err(err) => {
                    tracing::warn!(
                        "skipped slot {} {} - {}: {}",
                        plan.date,
                        plan.start_time,
                        plan.end_time,
                        err
                    );
                }
            }
        }
        Ok(count)
    })
    .await?;

    Ok(CountResponse::ok(count))
}

async fn bulk_delete_slots_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BulkDeleteSlotsRequest>,
) -> anyhow::Result<CountResponse> {
    use crate::schema::time_slots;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    let count = web::block(move || {
        diesel::delete(
            time_slots::table
                .filter(time_slots::id.eq_any(info.slot_ids))
                .filter(time_slots::is_available.eq(true)),
        )
        .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(CountResponse::ok(count))
}

async fn search_reservations_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchReservationsRequest>,
) -> anyhow::Result<SearchReservationsResponse> {
    use crate::schema::{reservations, time_slots};

    let info = info.into_inner();
    let filter = info.filter.unwrap_or_else(|| "all".to_string());
    match filter.as_str() {
        "upcoming" | "past" | "all" => {}
        _ => bail!("Unknown filter"),
    }
    // one boundary per request, local wall clock
    let today = Local::now().date_naive();

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        let mut query = reservations::table
            .inner_join(time_slots::table.on(time_slots::id.eq(reservations::slot_id)))
            .into_boxed();
        match filter.as_str() {
            "upcoming" => query = query.filter(time_slots::date.ge(today)),
            "past" => query = query.filter(time_slots::date.lt(today)),
            _ => {}
        }
        query
            .order(reservations::created_at.desc())
            .get_results::<(ReservationData, TimeSlotData)>(&conn)
    })
    .await
    .context("DB error")?;

    let reservations = rows
        .into_iter()
        .map(|(reservation, slot)| ReservationItem {
            id: reservation.id,
            slot_id: reservation.slot_id,
            date: crate::utils::format_date_str(&slot.date),
            start_time: crate::utils::format_time_str(&slot.start_time),
            end_time: crate::utils::format_time_str(&slot.end_time),
            student_name: reservation.student_name,
            parent_name: reservation.parent_name.unwrap_or_default(),
            student_email: reservation.student_email,
            student_phone: reservation.student_phone,
            message: reservation.message.unwrap_or_default(),
            status: reservation.status,
            created_at: crate::utils::format_datetime_str(&reservation.created_at),
        })
        .collect();

    Ok(SearchReservationsResponse {
        success: true,
        err: "".to_string(),
        reservations,
    })
}

async fn cancel_reservation_impl(
    pool: web::Data<DbPool>,
    info: web::Json<CancelReservationRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    crate::booking::cancel_reservation(&pool, info.reservation_id).await?;
    Ok(SimpleResponse::ok())
}
