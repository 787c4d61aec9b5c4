mod accounts;
mod catalog;

pub use accounts::{
    AccessTokenResponse, HealthResponse, LoginRequest, MessageResponse, RefreshRequest,
    RegisterRequest, TokenPairResponse,
};
pub use catalog::{
    AuthorPatchRequest, AuthorRequest, AuthorResponse, BookPatchRequest, BookRequest,
    BookResponse, PublisherPatchRequest, PublisherRequest, PublisherResponse,
};
