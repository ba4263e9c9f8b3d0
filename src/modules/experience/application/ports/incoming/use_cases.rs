use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::{
    Experience, ExperienceDraft, ExperienceFilter,
};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::Pagination;

#[async_trait]
pub trait ExperienceUseCases: Send + Sync {
    async fn list(
        &self,
        filter: ExperienceFilter,
        page: Pagination,
    ) -> Result<PageResult<Experience>, AppError>;

    /// `active_only` hides deactivated rows from public readers.
    async fn get_by_id(&self, id: Uuid, active_only: bool) -> Result<Experience, AppError>;

    async fn create(&self, draft: ExperienceDraft) -> Result<Experience, AppError>;

    async fn replace(&self, id: Uuid, draft: ExperienceDraft) -> Result<Experience, AppError>;

    async fn deactivate(&self, id: Uuid) -> Result<(), AppError>;
}
