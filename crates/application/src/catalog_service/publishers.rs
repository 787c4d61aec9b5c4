use super::*;

impl CatalogService {
    /// Creates a publisher.
    pub async fn create_publisher(&self, input: PublisherInput) -> AppResult<Publisher> {
        let publisher = self
            .publisher_repository
            .create(input.into_profile()?)
            .await?;
        info!(publisher_id = publisher.id().as_i64(), "publisher created");
        Ok(publisher)
    }

    /// Lists all publishers.
    pub async fn list_publishers(&self) -> AppResult<Vec<Publisher>> {
        self.publisher_repository.list().await
    }

    /// Returns one publisher.
    pub async fn get_publisher(&self, publisher_id: PublisherId) -> AppResult<Publisher> {
        self.publisher_repository
            .find(publisher_id)
            .await?
            .ok_or_else(|| not_found("publisher"))
    }

    /// Replaces every field of a publisher.
    pub async fn replace_publisher(
        &self,
        publisher_id: PublisherId,
        input: PublisherInput,
    ) -> AppResult<Publisher> {
        let profile = input.into_profile()?;
        self.get_publisher(publisher_id).await?;

        self.publisher_repository
            .update(Publisher::new(publisher_id, profile))
            .await
    }

    /// Updates the given fields of a publisher.
    pub async fn patch_publisher(
        &self,
        publisher_id: PublisherId,
        patch: PublisherPatch,
    ) -> AppResult<Publisher> {
        let current = self.get_publisher(publisher_id).await?;
        let profile = patch.apply(current.profile())?;

        self.publisher_repository
            .update(Publisher::new(publisher_id, profile))
            .await
    }

    /// Deletes a publisher together with its books.
    pub async fn delete_publisher(&self, publisher_id: PublisherId) -> AppResult<()> {
        if !self.publisher_repository.delete(publisher_id).await? {
            return Err(not_found("publisher"));
        }

        info!(publisher_id = publisher_id.as_i64(), "publisher deleted");
        Ok(())
    }
}
