use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use anyhow::{bail, Context};
use chrono::Local;
use diesel::prelude::*;
use futures::future::LocalBoxFuture;

use crate::{models::admin_sessions::AdminSessionData, protocol::SimpleResponse, DbPool};

pub const ADMIN_COOKIE: &str = "admin_token";
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Proof that the request carried a live admin session cookie. Handlers
/// list this as a parameter and unauthenticated requests are answered
/// with a 401 before the handler body runs.
pub struct AdminSession {
    pub token: String,
}

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Error>>;
    type Config = ();

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let token = match req.cookie(ADMIN_COOKIE) {
                Some(cookie) => cookie.value().to_string(),
                None => return Err(unauthorized("Admin login required")),
            };
            let pool = match req.app_data::<web::Data<DbPool>>() {
                Some(pool) => pool.clone(),
                None => return Err(unauthorized("Admin login required")),
            };
            match verify_session(&pool, token.clone()).await {
                Ok(()) => Ok(AdminSession { token }),
                Err(err) => Err(unauthorized(err.to_string())),
            }
        })
    }
}

pub async fn verify_session(pool: &web::Data<DbPool>, token: String) -> anyhow::Result<()> {
    use crate::schema::admin_sessions;

    let conn = pool.get().context("DB connection error")?;
    let session = web::block(move || {
        admin_sessions::table
            .filter(admin_sessions::token.eq(token))
            .first::<AdminSessionData>(&conn)
            .optional()
    })
    .await
    .context("DB error")?;

    if let Some(session) = session {
        let age = Local::now()
            .naive_local()
            .signed_duration_since(session.created_at);
        if age.num_seconds() <= SESSION_TTL_SECS {
            Ok(())
        } else {
            bail!("Login has expired");
        }
    } else {
        bail!("No such login token");
    }
}

fn unauthorized<S: ToString>(msg: S) -> Error {
    let msg = msg.to_string();
    InternalError::from_response(
        msg.clone(),
        HttpResponse::Unauthorized().json(SimpleResponse::err(msg)),
    )
    .into()
}
