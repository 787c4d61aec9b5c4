//! Catalog entities: authors, publishers and the books linking them.

use chrono::NaiveDate;
use folio_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::EmailAddress;

/// Longest accepted author name.
pub const AUTHOR_NAME_MAX_LENGTH: usize = 100;
const AUTHOR_NATIONALITY_MAX_LENGTH: usize = 50;
const PUBLISHER_NAME_MAX_LENGTH: usize = 100;
const PUBLISHER_ADDRESS_MAX_LENGTH: usize = 255;
/// Longest accepted book title.
pub const BOOK_TITLE_MAX_LENGTH: usize = 200;

/// Identifier of a stored author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AuthorId(i64);

impl AuthorId {
    /// Wraps a stored numeric identifier.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Identifier of a stored publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PublisherId(i64);

impl PublisherId {
    /// Wraps a stored numeric identifier.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Identifier of a stored book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(i64);

impl BookId {
    /// Wraps a stored numeric identifier.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// Validated author attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorProfile {
    name: NonEmptyString,
    birth_date: NaiveDate,
    nationality: NonEmptyString,
    biography: NonEmptyString,
    email: EmailAddress,
}

impl AuthorProfile {
    /// Creates a validated author profile.
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        nationality: impl Into<String>,
        biography: impl Into<String>,
        email: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            name: NonEmptyString::bounded("name", name, AUTHOR_NAME_MAX_LENGTH)?,
            birth_date,
            nationality: NonEmptyString::bounded(
                "nationality",
                nationality,
                AUTHOR_NATIONALITY_MAX_LENGTH,
            )?,
            biography: NonEmptyString::bounded("biography", biography, usize::MAX)?,
            email: EmailAddress::new(email)?,
        })
    }

    /// Returns the author's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the birth date.
    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Returns the nationality.
    #[must_use]
    pub fn nationality(&self) -> &str {
        self.nationality.as_str()
    }

    /// Returns the biography text.
    #[must_use]
    pub fn biography(&self) -> &str {
        self.biography.as_str()
    }

    /// Returns the normalized contact email; unique across authors.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Stored author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    profile: AuthorProfile,
}

impl Author {
    /// Pairs an identifier with its profile.
    #[must_use]
    pub fn new(id: AuthorId, profile: AuthorProfile) -> Self {
        Self { id, profile }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Returns the validated attributes.
    #[must_use]
    pub fn profile(&self) -> &AuthorProfile {
        &self.profile
    }
}

/// Absolute `http`/`https` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteUrl(Url);

impl WebsiteUrl {
    /// Parses and validates a website URL.
    pub fn new(value: &str) -> AppResult<Self> {
        let url = Url::parse(value.trim())
            .map_err(|error| AppError::Validation(format!("invalid website url: {error}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Validation(
                "website url must use http or https".to_owned(),
            ));
        }

        if url.host_str().is_none() {
            return Err(AppError::Validation(
                "website url must include a host".to_owned(),
            ));
        }

        Ok(Self(url))
    }

    /// Returns the URL in its serialized form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Validated publisher attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherProfile {
    name: NonEmptyString,
    address: NonEmptyString,
    website: WebsiteUrl,
    contact_email: EmailAddress,
    established_year: u32,
}

impl PublisherProfile {
    /// Creates a validated publisher profile.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        website: &str,
        contact_email: impl Into<String>,
        established_year: u32,
    ) -> AppResult<Self> {
        if established_year == 0 {
            return Err(AppError::Validation(
                "established_year must be a positive year".to_owned(),
            ));
        }

        Ok(Self {
            name: NonEmptyString::bounded("name", name, PUBLISHER_NAME_MAX_LENGTH)?,
            address: NonEmptyString::bounded("address", address, PUBLISHER_ADDRESS_MAX_LENGTH)?,
            website: WebsiteUrl::new(website)?,
            contact_email: EmailAddress::new(contact_email)?,
            established_year,
        })
    }

    /// Returns the publisher name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Returns the website URL.
    #[must_use]
    pub fn website(&self) -> &str {
        self.website.as_str()
    }

    /// Returns the contact email.
    #[must_use]
    pub fn contact_email(&self) -> &str {
        self.contact_email.as_str()
    }

    /// Returns the founding year.
    #[must_use]
    pub fn established_year(&self) -> u32 {
        self.established_year
    }
}

/// Stored publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publisher {
    id: PublisherId,
    profile: PublisherProfile,
}

impl Publisher {
    /// Pairs an identifier with its profile.
    #[must_use]
    pub fn new(id: PublisherId, profile: PublisherProfile) -> Self {
        Self { id, profile }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> PublisherId {
        self.id
    }

    /// Returns the validated attributes.
    #[must_use]
    pub fn profile(&self) -> &PublisherProfile {
        &self.profile
    }
}

/// ISBN-10 or ISBN-13 with separators removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn(String);

impl Isbn {
    /// Normalizes and validates an ISBN.
    ///
    /// Hyphens and spaces are dropped. ISBN-13 is 13 digits; ISBN-10 is nine
    /// digits followed by a digit or `X`.
    pub fn new(value: &str) -> AppResult<Self> {
        let normalized: String = value
            .chars()
            .filter(|character| !matches!(character, '-' | ' '))
            .map(|character| character.to_ascii_uppercase())
            .collect();

        let valid = match normalized.len() {
            13 => normalized.chars().all(|character| character.is_ascii_digit()),
            10 => {
                let (body, check) = normalized.split_at(9);
                body.chars().all(|character| character.is_ascii_digit())
                    && check
                        .chars()
                        .all(|character| character.is_ascii_digit() || character == 'X')
            }
            _ => false,
        };

        if !valid {
            return Err(AppError::Validation(format!(
                "isbn '{value}' must be 10 or 13 characters of digits"
            )));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized ISBN.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Validated book attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookProfile {
    title: NonEmptyString,
    author_id: AuthorId,
    publisher_id: PublisherId,
    publication_date: NaiveDate,
    isbn: Isbn,
    summary: NonEmptyString,
}

impl BookProfile {
    /// Creates a validated book profile. Referenced records are checked by
    /// the application layer.
    pub fn new(
        title: impl Into<String>,
        author_id: AuthorId,
        publisher_id: PublisherId,
        publication_date: NaiveDate,
        isbn: &str,
        summary: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            title: NonEmptyString::bounded("title", title, BOOK_TITLE_MAX_LENGTH)?,
            author_id,
            publisher_id,
            publication_date,
            isbn: Isbn::new(isbn)?,
            summary: NonEmptyString::bounded("summary", summary, usize::MAX)?,
        })
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the author reference.
    #[must_use]
    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    /// Returns the publisher reference.
    #[must_use]
    pub fn publisher_id(&self) -> PublisherId {
        self.publisher_id
    }

    /// Returns the publication date.
    #[must_use]
    pub fn publication_date(&self) -> NaiveDate {
        self.publication_date
    }

    /// Returns the normalized ISBN; unique across books.
    #[must_use]
    pub fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    /// Returns the summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.summary.as_str()
    }
}

/// Stored book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    profile: BookProfile,
}

impl Book {
    /// Pairs an identifier with its profile.
    #[must_use]
    pub fn new(id: BookId, profile: BookProfile) -> Self {
        Self { id, profile }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Returns the validated attributes.
    #[must_use]
    pub fn profile(&self) -> &BookProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::Validation("invalid test date".to_owned()))
    }

    #[test]
    fn author_profile_normalizes_email() -> AppResult<()> {
        let profile = AuthorProfile::new(
            "Jane Austen",
            date(1775, 12, 16)?,
            "British",
            "English novelist known for her six major novels.",
            "Jane.Austen@Example.com",
        )?;
        assert_eq!(profile.email(), "jane.austen@example.com");
        Ok(())
    }

    #[test]
    fn author_name_is_bounded() -> AppResult<()> {
        let result = AuthorProfile::new(
            "x".repeat(AUTHOR_NAME_MAX_LENGTH + 1),
            date(1775, 12, 16)?,
            "British",
            "bio",
            "jane@example.com",
        );
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn publisher_requires_http_website() {
        let result = PublisherProfile::new(
            "Penguin Books",
            "80 Strand, London",
            "ftp://penguin.co.uk",
            "info@penguin.co.uk",
            1935,
        );
        assert!(result.is_err());
    }

    #[test]
    fn publisher_rejects_year_zero() {
        let result = PublisherProfile::new(
            "Penguin Books",
            "80 Strand, London",
            "https://www.penguin.co.uk",
            "info@penguin.co.uk",
            0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn isbn_accepts_hyphenated_isbn13_and_isbn10_with_check_x() -> AppResult<()> {
        assert_eq!(Isbn::new("978-0-14-143951-8")?.as_str(), "9780141439518");
        assert_eq!(Isbn::new("080442957x")?.as_str(), "080442957X");
        Ok(())
    }

    #[test]
    fn isbn_rejects_wrong_lengths_and_letters() {
        assert!(Isbn::new("12345").is_err());
        assert!(Isbn::new("97801414395AB").is_err());
        assert!(Isbn::new("X804429570").is_err());
    }

    #[test]
    fn book_profile_keeps_references() -> AppResult<()> {
        let profile = BookProfile::new(
            "Pride and Prejudice",
            AuthorId::new(1),
            PublisherId::new(2),
            date(1813, 1, 28)?,
            "9780141439518",
            "A romantic novel of manners.",
        )?;
        assert_eq!(profile.author_id(), AuthorId::new(1));
        assert_eq!(profile.publisher_id(), PublisherId::new(2));
        Ok(())
    }
}
