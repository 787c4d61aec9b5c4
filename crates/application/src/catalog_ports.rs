mod inputs;
mod repositories;

pub use inputs::{AuthorInput, AuthorPatch, BookInput, BookPatch, PublisherInput, PublisherPatch};
pub use repositories::{AuthorRepository, BookRepository, PublisherRepository};
