use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::{Contact, ContactData};
use crate::shared::persistence::{PageResult, RepositoryError};
use crate::shared::validation::Pagination;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn find_latest_active(&self) -> Result<Option<Contact>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, RepositoryError>;

    async fn list(&self, page: Pagination) -> Result<PageResult<Contact>, RepositoryError>;

    /// `Duplicate` when the email is already taken.
    async fn create(&self, data: ContactData) -> Result<Contact, RepositoryError>;

    async fn replace(&self, id: Uuid, data: ContactData) -> Result<Contact, RepositoryError>;

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Contact, RepositoryError>;
}
