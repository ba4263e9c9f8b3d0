use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::education::application::domain::{Education, EducationDraft};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::Pagination;

#[async_trait]
pub trait EducationUseCases: Send + Sync {
    async fn list(
        &self,
        active_only: bool,
        page: Pagination,
    ) -> Result<PageResult<Education>, AppError>;

    async fn get_by_id(&self, id: Uuid, active_only: bool) -> Result<Education, AppError>;

    async fn create(&self, draft: EducationDraft) -> Result<Education, AppError>;

    async fn replace(&self, id: Uuid, draft: EducationDraft) -> Result<Education, AppError>;

    async fn deactivate(&self, id: Uuid) -> Result<(), AppError>;
}
