use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use folio_core::AppError;
use folio_domain::{DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_RATE_LIMIT_REQUESTS};
use folio_infrastructure::{
    DEFAULT_ACCESS_TTL_SECONDS, DEFAULT_REFRESH_TTL_SECONDS, JWT_SECRET_MIN_LENGTH,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_CATALOG_RATE_LIMIT_REQUESTS: u32 = 60;

/// Where users and catalog records are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres { database_url: String },
}

/// Where rate limit counters are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitStoreConfig {
    Memory,
    Redis { redis_url: String },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub api_host: String,
    pub api_port: u16,
    pub jwt_secret: String,
    pub jwt_access_ttl_seconds: u64,
    pub jwt_refresh_ttl_seconds: u64,
    pub storage: StorageBackend,
    pub rate_limit_store: RateLimitStoreConfig,
    pub rate_limit_requests: u32,
    pub rate_limit_period_seconds: u64,
    pub catalog_rate_limit_requests: u32,
    pub trust_proxy_headers: bool,
    pub cors_allowed_origin: Option<String>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");
        Self::from_lookup(migrate_only, |name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(
        migrate_only: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let jwt_secret = optional("JWT_SECRET")
            .ok_or_else(|| AppError::Validation("JWT_SECRET is required".to_owned()))?;
        if jwt_secret.len() < JWT_SECRET_MIN_LENGTH {
            return Err(AppError::Validation(format!(
                "JWT_SECRET must be at least {JWT_SECRET_MIN_LENGTH} characters"
            )));
        }

        let storage = match optional("STORAGE_BACKEND").as_deref().unwrap_or("memory") {
            "memory" => StorageBackend::Memory,
            "postgres" => StorageBackend::Postgres {
                database_url: optional("DATABASE_URL").ok_or_else(|| {
                    AppError::Validation(
                        "DATABASE_URL is required when STORAGE_BACKEND=postgres".to_owned(),
                    )
                })?,
            },
            other => {
                return Err(AppError::Validation(format!(
                    "STORAGE_BACKEND must be either 'memory' or 'postgres', got '{other}'"
                )));
            }
        };

        if migrate_only && storage == StorageBackend::Memory {
            return Err(AppError::Validation(
                "migrate requires STORAGE_BACKEND=postgres".to_owned(),
            ));
        }

        let rate_limit_store = match optional("RATE_LIMIT_STORE").as_deref().unwrap_or("memory") {
            "memory" => RateLimitStoreConfig::Memory,
            "redis" => RateLimitStoreConfig::Redis {
                redis_url: optional("REDIS_URL").ok_or_else(|| {
                    AppError::Validation(
                        "REDIS_URL is required when RATE_LIMIT_STORE=redis".to_owned(),
                    )
                })?,
            },
            other => {
                return Err(AppError::Validation(format!(
                    "RATE_LIMIT_STORE must be either 'memory' or 'redis', got '{other}'"
                )));
            }
        };

        Ok(Self {
            migrate_only,
            api_host: optional("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned()),
            api_port: parse_or("API_PORT", optional("API_PORT"), 8000)?,
            jwt_secret,
            jwt_access_ttl_seconds: parse_or(
                "JWT_ACCESS_TTL_SECONDS",
                optional("JWT_ACCESS_TTL_SECONDS"),
                DEFAULT_ACCESS_TTL_SECONDS,
            )?,
            jwt_refresh_ttl_seconds: parse_or(
                "JWT_REFRESH_TTL_SECONDS",
                optional("JWT_REFRESH_TTL_SECONDS"),
                DEFAULT_REFRESH_TTL_SECONDS,
            )?,
            storage,
            rate_limit_store,
            rate_limit_requests: parse_or(
                "RATE_LIMIT_REQUESTS",
                optional("RATE_LIMIT_REQUESTS"),
                DEFAULT_RATE_LIMIT_REQUESTS,
            )?,
            rate_limit_period_seconds: parse_or(
                "RATE_LIMIT_PERIOD_SECONDS",
                optional("RATE_LIMIT_PERIOD_SECONDS"),
                DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            )?,
            catalog_rate_limit_requests: parse_or(
                "CATALOG_RATE_LIMIT_REQUESTS",
                optional("CATALOG_RATE_LIMIT_REQUESTS"),
                DEFAULT_CATALOG_RATE_LIMIT_REQUESTS,
            )?,
            trust_proxy_headers: optional("TRUST_PROXY_HEADERS")
                .is_some_and(|value| value.eq_ignore_ascii_case("true")),
            cors_allowed_origin: optional("CORS_ALLOWED_ORIGIN"),
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::Validation(format!("invalid {name}: {error}"))),
        None => Ok(default),
    }
}
