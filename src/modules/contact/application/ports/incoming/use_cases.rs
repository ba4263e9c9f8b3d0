use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::{Contact, ContactDraft};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::Pagination;

#[async_trait]
pub trait ContactUseCases: Send + Sync {
    async fn get_public(&self) -> Result<Contact, AppError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Contact, AppError>;
    async fn list(&self, page: Pagination) -> Result<PageResult<Contact>, AppError>;
    async fn create(&self, draft: ContactDraft) -> Result<Contact, AppError>;
    async fn replace(&self, id: Uuid, draft: ContactDraft) -> Result<Contact, AppError>;
    async fn deactivate(&self, id: Uuid) -> Result<(), AppError>;
}
