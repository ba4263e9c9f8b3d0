use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact_form::application::domain::{
    ContactForm, ContactFormDraft, ContactFormFilter,
};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::Pagination;

#[async_trait]
pub trait ContactFormUseCases: Send + Sync {
    async fn submit(&self, draft: ContactFormDraft) -> Result<ContactForm, AppError>;

    async fn list(
        &self,
        filter: ContactFormFilter,
        page: Pagination,
    ) -> Result<PageResult<ContactForm>, AppError>;

    async fn get_by_id(&self, id: Uuid) -> Result<ContactForm, AppError>;

    async fn mark_read(&self, id: Uuid, is_read: bool) -> Result<ContactForm, AppError>;

    async fn archive(&self, id: Uuid, is_archived: bool) -> Result<ContactForm, AppError>;
}
