use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::education::application::domain::{Education, EducationData};
use crate::shared::persistence::{PageResult, RepositoryError};
use crate::shared::validation::Pagination;

#[async_trait]
pub trait EducationRepository: Send + Sync {
    /// Ordered by `order` ascending, then newest first.
    async fn list(
        &self,
        active_only: bool,
        page: Pagination,
    ) -> Result<PageResult<Education>, RepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
        active_only: bool,
    ) -> Result<Option<Education>, RepositoryError>;

    async fn create(&self, data: EducationData) -> Result<Education, RepositoryError>;

    async fn replace(&self, id: Uuid, data: EducationData) -> Result<Education, RepositoryError>;

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Education, RepositoryError>;
}
