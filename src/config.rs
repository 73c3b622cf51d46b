use std::net::IpAddr;

pub const DEFAULT_TABLE_NAME: &str = "ContactFormSubmissions";

#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
    pub store: StoreBackend,
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub db_max_connections: u32,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let table_name = env_or("TABLE_NAME", DEFAULT_TABLE_NAME);

        let store = match env_or("CONTACT_STORE", "postgres").as_str() {
            "postgres" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            other => return Err(format!("Invalid CONTACT_STORE: {other}")),
        };

        let database_url = std::env::var("DATABASE_URL").ok();
        if store == StoreBackend::Postgres && database_url.is_none() {
            return Err("Missing required environment variable: DATABASE_URL".to_string());
        }

        let host: IpAddr = env_or("CONTACT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_HOST: {e}"))?;

        let port: u16 = env_or("CONTACT_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_PORT: {e}"))?;

        let max_body_size: usize = env_or("CONTACT_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_MAX_BODY_SIZE: {e}"))?;

        let db_max_connections: u32 = env_or("CONTACT_DB_MAX_CONNECTIONS", "5")
            .parse()
            .map_err(|e| format!("Invalid CONTACT_DB_MAX_CONNECTIONS: {e}"))?;

        let log_level = env_or("CONTACT_LOG_LEVEL", "info");

        Ok(Config {
            table_name,
            store,
            database_url,
            host,
            port,
            max_body_size,
            db_max_connections,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
