use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact_form::application::{
    domain::{ContactForm, ContactFormDraft, ContactFormFilter},
    ports::{incoming::ContactFormUseCases, outgoing::ContactFormRepository},
};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::Pagination;

const RESOURCE: &str = "Contact form";

#[derive(Debug, Clone)]
pub struct ContactFormService<R>
where
    R: ContactFormRepository + Send + Sync,
{
    repository: R,
}

impl<R> ContactFormService<R>
where
    R: ContactFormRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ContactFormUseCases for ContactFormService<R>
where
    R: ContactFormRepository + Send + Sync,
{
    async fn submit(&self, draft: ContactFormDraft) -> Result<ContactForm, AppError> {
        let data = draft.validate()?;
        let form = self.repository.create(data).await?;

        tracing::info!(contact_form_id = %form.id, "Contact form received");
        Ok(form)
    }

    async fn list(
        &self,
        filter: ContactFormFilter,
        page: Pagination,
    ) -> Result<PageResult<ContactForm>, AppError> {
        Ok(self.repository.list(filter, page).await?)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ContactForm, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE))
    }

    async fn mark_read(&self, id: Uuid, is_read: bool) -> Result<ContactForm, AppError> {
        self.repository
            .set_read(id, is_read)
            .await
            .map_err(|e| AppError::from_repository(RESOURCE, e))
    }

    async fn archive(&self, id: Uuid, is_archived: bool) -> Result<ContactForm, AppError> {
        self.repository
            .set_archived(id, is_archived)
            .await
            .map_err(|e| AppError::from_repository(RESOURCE, e))
    }
}
