//! Application services and ports.

#![forbid(unsafe_code)]

mod catalog_ports;
mod catalog_service;
mod rate_limit_service;
mod user_service;

pub use catalog_ports::{
    AuthorInput, AuthorPatch, AuthorRepository, BookInput, BookPatch, BookRepository,
    PublisherInput, PublisherPatch, PublisherRepository,
};
pub use catalog_service::CatalogService;
pub use rate_limit_service::{
    Admission, CounterStore, KeyFunc, RateLimitOutcome, RateLimitRequest, RateLimitRule,
    RateLimitService,
};
pub use user_service::{
    AuthOutcome, PasswordHasher, RegisterParams, TokenIssuer, TokenKind, TokenPair, UserRecord,
    UserRepository, UserService,
};
