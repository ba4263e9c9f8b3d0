use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::{
    domain::{Experience, ExperienceDraft, ExperienceFilter},
    ports::{incoming::ExperienceUseCases, outgoing::ExperienceRepository},
};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::Pagination;

const RESOURCE: &str = "Experience";

#[derive(Debug, Clone)]
pub struct ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    repository: R,
}

impl<R> ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ExperienceUseCases for ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn list(
        &self,
        filter: ExperienceFilter,
        page: Pagination,
    ) -> Result<PageResult<Experience>, AppError> {
        Ok(self.repository.list(filter, page).await?)
    }

    async fn get_by_id(&self, id: Uuid, active_only: bool) -> Result<Experience, AppError> {
        self.repository
            .find_by_id(id, active_only)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE))
    }

    async fn create(&self, draft: ExperienceDraft) -> Result<Experience, AppError> {
        let data = draft.validate()?;
        let experience = self.repository.create(data).await?;

        tracing::info!(experience_id = %experience.id, "Experience created");
        Ok(experience)
    }

    async fn replace(&self, id: Uuid, draft: ExperienceDraft) -> Result<Experience, AppError> {
        let data = draft.validate()?;

        self.repository
            .replace(id, data)
            .await
            .map_err(|e| AppError::from_repository(RESOURCE, e))
    }

    async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .set_active(id, false)
            .await
            .map_err(|e| AppError::from_repository(RESOURCE, e))?;

        tracing::info!(experience_id = %id, "Experience deactivated");
        Ok(())
    }
}
