//! JSON CRUD handlers for authors, publishers and books.
//!
//! Every route requires an authenticated caller; writes are additionally
//! rate limited at the router.

mod authors;
mod books;
mod publishers;

pub use authors::{
    create_author_handler, delete_author_handler, get_author_handler, list_authors_handler,
    patch_author_handler, replace_author_handler,
};
pub use books::{
    create_book_handler, delete_book_handler, get_book_handler, list_books_handler,
    patch_book_handler, replace_book_handler,
};
pub use publishers::{
    create_publisher_handler, delete_publisher_handler, get_publisher_handler,
    list_publishers_handler, patch_publisher_handler, replace_publisher_handler,
};
