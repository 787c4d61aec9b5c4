use super::*;

impl CatalogService {
    /// Creates an author.
    pub async fn create_author(&self, input: AuthorInput) -> AppResult<Author> {
        let author = self.author_repository.create(input.into_profile()?).await?;
        info!(author_id = author.id().as_i64(), "author created");
        Ok(author)
    }

    /// Lists all authors.
    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.author_repository.list().await
    }

    /// Returns one author.
    pub async fn get_author(&self, author_id: AuthorId) -> AppResult<Author> {
        self.author_repository
            .find(author_id)
            .await?
            .ok_or_else(|| not_found("author"))
    }

    /// Replaces every field of an author.
    pub async fn replace_author(
        &self,
        author_id: AuthorId,
        input: AuthorInput,
    ) -> AppResult<Author> {
        let profile = input.into_profile()?;
        self.get_author(author_id).await?;

        self.author_repository
            .update(Author::new(author_id, profile))
            .await
    }

    /// Updates the given fields of an author.
    pub async fn patch_author(&self, author_id: AuthorId, patch: AuthorPatch) -> AppResult<Author> {
        let current = self.get_author(author_id).await?;
        let profile = patch.apply(current.profile())?;

        self.author_repository
            .update(Author::new(author_id, profile))
            .await
    }

    /// Deletes an author together with their books.
    pub async fn delete_author(&self, author_id: AuthorId) -> AppResult<()> {
        if !self.author_repository.delete(author_id).await? {
            return Err(not_found("author"));
        }

        info!(author_id = author_id.as_i64(), "author deleted");
        Ok(())
    }
}
