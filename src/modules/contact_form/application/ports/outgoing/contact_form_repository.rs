use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact_form::application::domain::{
    ContactForm, ContactFormData, ContactFormFilter,
};
use crate::shared::persistence::{PageResult, RepositoryError};
use crate::shared::validation::Pagination;

#[async_trait]
pub trait ContactFormRepository: Send + Sync {
    async fn create(&self, data: ContactFormData) -> Result<ContactForm, RepositoryError>;

    /// Newest first.
    async fn list(
        &self,
        filter: ContactFormFilter,
        page: Pagination,
    ) -> Result<PageResult<ContactForm>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactForm>, RepositoryError>;

    async fn set_read(&self, id: Uuid, is_read: bool) -> Result<ContactForm, RepositoryError>;

    async fn set_archived(
        &self,
        id: Uuid,
        is_archived: bool,
    ) -> Result<ContactForm, RepositoryError>;
}
