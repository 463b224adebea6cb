#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

mod admin;
mod blog;
mod booking;
mod config;
mod database;
mod error;
mod models;
mod notify;
mod protocol;
mod schedule;
mod schema;
mod utils;
mod validate;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, SqliteConnection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::blog::BlogFeed;
use crate::config::AppConfig;
use crate::notify::LineNotifier;

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let pool = database::init_pool(&config.database_url).expect("Failed to create pool");
    database::run_migrations(&pool).expect("Failed to run migrations");

    let notifier = LineNotifier::new(config.line.clone());
    let feed = BlogFeed::new(config.microcms.clone());

    let bind = config.bind_addr.clone();
    let static_dir = config.static_dir.clone();
    tracing::info!("listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            .data(config.clone())
            .data(notifier.clone())
            .data(feed.clone())
            // booking
            .service(web::scope("/api/booking").configure(booking::config))
            // administrator console
            .service(web::scope("/api/admin").configure(admin::config))
            // blog feed
            .service(web::scope("/api/blog").configure(blog::config))
            // marketing pages
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind(bind)?
    .run()
    .await
}
