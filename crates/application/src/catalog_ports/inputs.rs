use chrono::NaiveDate;

use folio_core::AppResult;
use folio_domain::{AuthorId, AuthorProfile, BookProfile, PublisherId, PublisherProfile};

/// Input payload for creating or replacing an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInput {
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Nationality.
    pub nationality: String,
    /// Biography text.
    pub biography: String,
    /// Contact email, unique across authors.
    pub email: String,
}

impl AuthorInput {
    /// Validates the payload into a profile.
    pub fn into_profile(self) -> AppResult<AuthorProfile> {
        AuthorProfile::new(
            self.name,
            self.birth_date,
            self.nationality,
            self.biography,
            self.email,
        )
    }
}

/// Partial author update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    /// New name.
    pub name: Option<String>,
    /// New date of birth.
    pub birth_date: Option<NaiveDate>,
    /// New nationality.
    pub nationality: Option<String>,
    /// New biography.
    pub biography: Option<String>,
    /// New contact email.
    pub email: Option<String>,
}

impl AuthorPatch {
    /// Merges the patch over `current` and re-validates the result.
    pub fn apply(self, current: &AuthorProfile) -> AppResult<AuthorProfile> {
        AuthorInput {
            name: self.name.unwrap_or_else(|| current.name().to_owned()),
            birth_date: self.birth_date.unwrap_or(current.birth_date()),
            nationality: self
                .nationality
                .unwrap_or_else(|| current.nationality().to_owned()),
            biography: self
                .biography
                .unwrap_or_else(|| current.biography().to_owned()),
            email: self.email.unwrap_or_else(|| current.email().to_owned()),
        }
        .into_profile()
    }
}

/// Input payload for creating or replacing a publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherInput {
    /// Publisher name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Absolute website URL.
    pub website: String,
    /// Contact email.
    pub contact_email: String,
    /// Year the publisher was established.
    pub established_year: u32,
}

impl PublisherInput {
    /// Validates the payload into a profile.
    pub fn into_profile(self) -> AppResult<PublisherProfile> {
        PublisherProfile::new(
            self.name,
            self.address,
            &self.website,
            self.contact_email,
            self.established_year,
        )
    }
}

/// Partial publisher update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublisherPatch {
    /// New name.
    pub name: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New website URL.
    pub website: Option<String>,
    /// New contact email.
    pub contact_email: Option<String>,
    /// New establishment year.
    pub established_year: Option<u32>,
}

impl PublisherPatch {
    /// Merges the patch over `current` and re-validates the result.
    pub fn apply(self, current: &PublisherProfile) -> AppResult<PublisherProfile> {
        PublisherInput {
            name: self.name.unwrap_or_else(|| current.name().to_owned()),
            address: self.address.unwrap_or_else(|| current.address().to_owned()),
            website: self.website.unwrap_or_else(|| current.website().to_owned()),
            contact_email: self
                .contact_email
                .unwrap_or_else(|| current.contact_email().to_owned()),
            established_year: self
                .established_year
                .unwrap_or(current.established_year()),
        }
        .into_profile()
    }
}

/// Input payload for creating or replacing a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    /// Title.
    pub title: String,
    /// Referenced author.
    pub author_id: i64,
    /// Referenced publisher.
    pub publisher_id: i64,
    /// Publication date.
    pub publication_date: NaiveDate,
    /// ISBN-10 or ISBN-13, unique across books.
    pub isbn: String,
    /// Summary text.
    pub summary: String,
}

impl BookInput {
    /// Validates the payload into a profile. References are not checked here.
    pub fn into_profile(self) -> AppResult<BookProfile> {
        BookProfile::new(
            self.title,
            AuthorId::new(self.author_id),
            PublisherId::new(self.publisher_id),
            self.publication_date,
            &self.isbn,
            self.summary,
        )
    }
}

/// Partial book update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    /// New title.
    pub title: Option<String>,
    /// New author reference.
    pub author_id: Option<i64>,
    /// New publisher reference.
    pub publisher_id: Option<i64>,
    /// New publication date.
    pub publication_date: Option<NaiveDate>,
    /// New ISBN.
    pub isbn: Option<String>,
    /// New summary.
    pub summary: Option<String>,
}

impl BookPatch {
    /// Merges the patch over `current` and re-validates the result.
    pub fn apply(self, current: &BookProfile) -> AppResult<BookProfile> {
        BookInput {
            title: self.title.unwrap_or_else(|| current.title().to_owned()),
            author_id: self
                .author_id
                .unwrap_or(current.author_id().as_i64()),
            publisher_id: self
                .publisher_id
                .unwrap_or(current.publisher_id().as_i64()),
            publication_date: self
                .publication_date
                .unwrap_or(current.publication_date()),
            isbn: self.isbn.unwrap_or_else(|| current.isbn().to_owned()),
            summary: self.summary.unwrap_or_else(|| current.summary().to_owned()),
        }
        .into_profile()
    }
}
