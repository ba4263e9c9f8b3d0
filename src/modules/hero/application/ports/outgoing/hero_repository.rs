use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::hero::application::domain::{Hero, HeroData};
use crate::shared::persistence::{PageResult, RepositoryError};
use crate::shared::validation::Pagination;

#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Most recently updated hero with `is_active = true`.
    async fn find_latest_active(&self) -> Result<Option<Hero>, RepositoryError>;

    async fn list(&self, page: Pagination) -> Result<PageResult<Hero>, RepositoryError>;

    async fn create(&self, data: HeroData) -> Result<Hero, RepositoryError>;

    /// Overwrites every field. `NotFound` when the id is unknown.
    async fn replace(&self, id: Uuid, data: HeroData) -> Result<Hero, RepositoryError>;

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Hero, RepositoryError>;
}
