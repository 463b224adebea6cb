use crate::DbPool;
use actix_web::web;
use anyhow::Context;
use diesel::connection::SimpleConnection;
use diesel::{r2d2::ConnectionManager, SqliteConnection};
use r2d2::PooledConnection;

embed_migrations!();

#[derive(Debug)]
struct ConnectionOptions;

impl r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        // WAL lets readers proceed during writes; the busy timeout makes
        // concurrent conditional updates queue instead of failing
        conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn init_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)
        .context("Failed to create pool")?;
    Ok(pool)
}

pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    let conn = pool.get().context("DB connection")?;
    embedded_migrations::run(&*conn).context("Failed to run migrations")?;
    Ok(())
}

pub fn get_db_conn(
    pool: &web::Data<DbPool>,
) -> anyhow::Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
    pool.get().context("DB connection")
}

#[cfg(test)]
pub fn test_pool() -> (tempfile::TempDir, DbPool) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let pool = init_pool(db_path.to_str().expect("temp path is not utf-8")).expect("pool");
    run_migrations(&pool).expect("migrations");
    (dir, pool)
}
