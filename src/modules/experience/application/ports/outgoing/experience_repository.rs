use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::application::domain::{
    Experience, ExperienceData, ExperienceFilter,
};
use crate::shared::persistence::{PageResult, RepositoryError};
use crate::shared::validation::Pagination;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Ordered by `order` ascending, then newest first.
    async fn list(
        &self,
        filter: ExperienceFilter,
        page: Pagination,
    ) -> Result<PageResult<Experience>, RepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
        active_only: bool,
    ) -> Result<Option<Experience>, RepositoryError>;

    async fn create(&self, data: ExperienceData) -> Result<Experience, RepositoryError>;

    async fn replace(&self, id: Uuid, data: ExperienceData)
        -> Result<Experience, RepositoryError>;

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Experience, RepositoryError>;
}
