use super::*;

impl CatalogService {
    /// Creates a book after checking its author and publisher exist.
    pub async fn create_book(&self, input: BookInput) -> AppResult<Book> {
        let profile = input.into_profile()?;
        self.ensure_references(&profile).await?;

        let book = self.book_repository.create(profile).await?;
        info!(book_id = book.id().as_i64(), "book created");
        Ok(book)
    }

    /// Lists all books.
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.book_repository.list().await
    }

    /// Returns one book.
    pub async fn get_book(&self, book_id: BookId) -> AppResult<Book> {
        self.book_repository
            .find(book_id)
            .await?
            .ok_or_else(|| not_found("book"))
    }

    /// Replaces every field of a book.
    pub async fn replace_book(&self, book_id: BookId, input: BookInput) -> AppResult<Book> {
        let profile = input.into_profile()?;
        self.get_book(book_id).await?;
        self.ensure_references(&profile).await?;

        self.book_repository.update(Book::new(book_id, profile)).await
    }

    /// Updates the given fields of a book.
    pub async fn patch_book(&self, book_id: BookId, patch: BookPatch) -> AppResult<Book> {
        let current = self.get_book(book_id).await?;
        let profile = patch.apply(current.profile())?;
        self.ensure_references(&profile).await?;

        self.book_repository.update(Book::new(book_id, profile)).await
    }

    /// Deletes a book.
    pub async fn delete_book(&self, book_id: BookId) -> AppResult<()> {
        if !self.book_repository.delete(book_id).await? {
            return Err(not_found("book"));
        }

        info!(book_id = book_id.as_i64(), "book deleted");
        Ok(())
    }

    async fn ensure_references(&self, profile: &BookProfile) -> AppResult<()> {
        let author_id = profile.author_id();
        if self.author_repository.find(author_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "Invalid pk \"{}\" - author does not exist.",
                author_id.as_i64()
            )));
        }

        let publisher_id = profile.publisher_id();
        if self.publisher_repository.find(publisher_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "Invalid pk \"{}\" - publisher does not exist.",
                publisher_id.as_i64()
            )));
        }

        Ok(())
    }
}
