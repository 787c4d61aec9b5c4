//! Rate limiting ports and application service.
//!
//! Fixed-window counting per key against a shared, expiring counter store.
//! Each admitted request rewrites the counter with a fresh time-to-live, so
//! a window only closes after `period` seconds without admissions.

mod config;
mod ports;
mod service;


pub use config::{KeyFunc, RateLimitRequest, RateLimitRule};
pub use ports::CounterStore;
pub use service::{Admission, RateLimitOutcome, RateLimitService};
