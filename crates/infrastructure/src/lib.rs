//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod argon2_password_hasher;
mod in_memory_catalog_repository;
mod in_memory_counter_store;
mod in_memory_user_repository;
mod jwt_token_issuer;
mod postgres_catalog_repository;
mod postgres_user_repository;
mod redis_counter_store;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use in_memory_catalog_repository::InMemoryCatalogRepository;
pub use in_memory_counter_store::InMemoryCounterStore;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use jwt_token_issuer::{
    DEFAULT_ACCESS_TTL_SECONDS, DEFAULT_REFRESH_TTL_SECONDS, JWT_SECRET_MIN_LENGTH, JwtTokenIssuer,
};
pub use postgres_catalog_repository::PostgresCatalogRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use redis_counter_store::RedisCounterStore;
