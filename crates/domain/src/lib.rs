//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod catalog;
mod rate_limit;
mod user;

pub use catalog::{
    AUTHOR_NAME_MAX_LENGTH, Author, AuthorId, AuthorProfile, BOOK_TITLE_MAX_LENGTH, Book, BookId,
    BookProfile, Isbn, Publisher, PublisherId, PublisherProfile, WebsiteUrl,
};
pub use rate_limit::{
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_RATE_LIMIT_REQUESTS,
    MAX_RATE_LIMIT_PERIOD_SECONDS, RateLimitExceeded, RateLimitKey, RateLimitPolicy,
};
pub use user::{
    EmailAddress, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, USERNAME_MAX_LENGTH, UserId, Username,
    validate_password,
};
