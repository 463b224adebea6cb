use std::env;

#[derive(Clone)]
pub struct LineConfig {
    pub access_token: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Clone)]
pub struct MicroCmsConfig {
    pub service_domain: Option<String>,
    pub api_key: Option<String>,
}

/// Everything read from the environment, gathered once at startup. The
/// integration values are optional on purpose: without them the server still
/// runs, skipping LINE pushes and serving the built-in blog data.
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: String,
    pub static_dir: String,
    pub admin_password: Option<String>,
    pub line: LineConfig,
    pub microcms: MicroCmsConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "aycc.db".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
            line: LineConfig {
                access_token: env::var("LINE_CHANNEL_ACCESS_TOKEN").ok(),
                user_id: env::var("LINE_USER_ID").ok(),
            },
            microcms: MicroCmsConfig {
                service_domain: env::var("MICROCMS_SERVICE_DOMAIN").ok(),
                api_key: env::var("MICROCMS_API_KEY").ok(),
            },
        }
    }
}
