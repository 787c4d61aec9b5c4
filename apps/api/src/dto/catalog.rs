use chrono::NaiveDate;
use folio_application::{
    AuthorInput, AuthorPatch, BookInput, BookPatch, PublisherInput, PublisherPatch,
};
use folio_domain::{Author, Book, Publisher};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AuthorRequest {
    pub name: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
    pub biography: String,
    pub email: String,
}

impl From<AuthorRequest> for AuthorInput {
    fn from(request: AuthorRequest) -> Self {
        Self {
            name: request.name,
            birth_date: request.birth_date,
            nationality: request.nationality,
            biography: request.biography,
            email: request.email,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthorPatchRequest {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub biography: Option<String>,
    pub email: Option<String>,
}

impl From<AuthorPatchRequest> for AuthorPatch {
    fn from(request: AuthorPatchRequest) -> Self {
        Self {
            name: request.name,
            birth_date: request.birth_date,
            nationality: request.nationality,
            biography: request.biography,
            email: request.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
    pub biography: String,
    pub email: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        let profile = author.profile();
        Self {
            id: author.id().as_i64(),
            name: profile.name().to_owned(),
            birth_date: profile.birth_date(),
            nationality: profile.nationality().to_owned(),
            biography: profile.biography().to_owned(),
            email: profile.email().to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PublisherRequest {
    pub name: String,
    pub address: String,
    pub website: String,
    pub contact_email: String,
    pub established_year: u32,
}

impl From<PublisherRequest> for PublisherInput {
    fn from(request: PublisherRequest) -> Self {
        Self {
            name: request.name,
            address: request.address,
            website: request.website,
            contact_email: request.contact_email,
            established_year: request.established_year,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PublisherPatchRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub contact_email: Option<String>,
    pub established_year: Option<u32>,
}

impl From<PublisherPatchRequest> for PublisherPatch {
    fn from(request: PublisherPatchRequest) -> Self {
        Self {
            name: request.name,
            address: request.address,
            website: request.website,
            contact_email: request.contact_email,
            established_year: request.established_year,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PublisherResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub website: String,
    pub contact_email: String,
    pub established_year: u32,
}

impl From<Publisher> for PublisherResponse {
    fn from(publisher: Publisher) -> Self {
        let profile = publisher.profile();
        Self {
            id: publisher.id().as_i64(),
            name: profile.name().to_owned(),
            address: profile.address().to_owned(),
            website: profile.website().to_owned(),
            contact_email: profile.contact_email().to_owned(),
            established_year: profile.established_year(),
        }
    }
}

/// Book payload; `author` and `publisher` are primary keys.
#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub title: String,
    pub author: i64,
    pub publisher: i64,
    pub publication_date: NaiveDate,
    pub isbn: String,
    pub summary: String,
}

impl From<BookRequest> for BookInput {
    fn from(request: BookRequest) -> Self {
        Self {
            title: request.title,
            author_id: request.author,
            publisher_id: request.publisher,
            publication_date: request.publication_date,
            isbn: request.isbn,
            summary: request.summary,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookPatchRequest {
    pub title: Option<String>,
    pub author: Option<i64>,
    pub publisher: Option<i64>,
    pub publication_date: Option<NaiveDate>,
    pub isbn: Option<String>,
    pub summary: Option<String>,
}

impl From<BookPatchRequest> for BookPatch {
    fn from(request: BookPatchRequest) -> Self {
        Self {
            title: request.title,
            author_id: request.author,
            publisher_id: request.publisher,
            publication_date: request.publication_date,
            isbn: request.isbn,
            summary: request.summary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: i64,
    pub publisher: i64,
    pub publication_date: NaiveDate,
    pub isbn: String,
    pub summary: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        let profile = book.profile();
        Self {
            id: book.id().as_i64(),
            title: profile.title().to_owned(),
            author: profile.author_id().as_i64(),
            publisher: profile.publisher_id().as_i64(),
            publication_date: profile.publication_date(),
            isbn: profile.isbn().to_owned(),
            summary: profile.summary().to_owned(),
        }
    }
}
