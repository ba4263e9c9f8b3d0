use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::hero::application::domain::{Hero, HeroDraft};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::Pagination;

#[async_trait]
pub trait HeroUseCases: Send + Sync {
    async fn get_public(&self) -> Result<Hero, AppError>;
    async fn list(&self, page: Pagination) -> Result<PageResult<Hero>, AppError>;
    async fn create(&self, draft: HeroDraft) -> Result<Hero, AppError>;
    async fn replace(&self, id: Uuid, draft: HeroDraft) -> Result<Hero, AppError>;
    async fn deactivate(&self, id: Uuid) -> Result<(), AppError>;
}
