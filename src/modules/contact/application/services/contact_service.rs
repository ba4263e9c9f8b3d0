use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::{
    domain::{Contact, ContactDraft},
    ports::{incoming::ContactUseCases, outgoing::ContactRepository},
};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::Pagination;

const RESOURCE: &str = "Contact";

#[derive(Debug, Clone)]
pub struct ContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> ContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ContactUseCases for ContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn get_public(&self) -> Result<Contact, AppError> {
        self.repository
            .find_latest_active()
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Contact, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE))
    }

    async fn list(&self, page: Pagination) -> Result<PageResult<Contact>, AppError> {
        Ok(self.repository.list(page).await?)
    }

    async fn create(&self, draft: ContactDraft) -> Result<Contact, AppError> {
        let data = draft.validate()?;
        let contact = self.repository.create(data).await?;

        tracing::info!(contact_id = %contact.id, "Contact created");
        Ok(contact)
    }

    async fn replace(&self, id: Uuid, draft: ContactDraft) -> Result<Contact, AppError> {
        let data = draft.validate()?;

        self.repository
            .replace(id, data)
            .await
            .map_err(|e| AppError::from_repository(RESOURCE, e))
    }

    async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .set_active(id, false)
            .await
            .map_err(|e| AppError::from_repository(RESOURCE, e))?;

        tracing::info!(contact_id = %id, "Contact deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use crate::modules::contact::application::domain::ContactData;
    use crate::shared::errors::normalize;
    use crate::shared::persistence::RepositoryError;
    use crate::shared::validation::messages;

    /// In-memory store enforcing the unique email index.
    #[derive(Clone, Default)]
    struct InMemoryContactRepository {
        emails: Arc<Mutex<HashSet<String>>>,
    }

    fn to_contact(id: Uuid, data: ContactData) -> Contact {
        let now = Utc::now();
        Contact {
            id,
            email: data.email,
            phone: data.phone,
            linkedin: data.linkedin,
            github: data.github,
            location: data.location,
            is_active: data.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    #[async_trait]
    impl ContactRepository for InMemoryContactRepository {
        async fn find_latest_active(&self) -> Result<Option<Contact>, RepositoryError> {
            Ok(None)
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Contact>, RepositoryError> {
            Ok(None)
        }

        async fn list(&self, page: Pagination) -> Result<PageResult<Contact>, RepositoryError> {
            Ok(PageResult::new(vec![], page, 0))
        }

        async fn create(&self, data: ContactData) -> Result<Contact, RepositoryError> {
            if !self.emails.lock().unwrap().insert(data.email.clone()) {
                return Err(RepositoryError::Duplicate(messages::duplicate("email")));
            }
            Ok(to_contact(Uuid::new_v4(), data))
        }

        async fn replace(&self, id: Uuid, data: ContactData) -> Result<Contact, RepositoryError> {
            Ok(to_contact(id, data))
        }

        async fn set_active(
            &self,
            _id: Uuid,
            _is_active: bool,
        ) -> Result<Contact, RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    fn draft(email: &str) -> ContactDraft {
        ContactDraft {
            email: Some(email.into()),
            phone: Some("+49 30 1234567".into()),
            linkedin: Some("https://linkedin.com/in/janedoe".into()),
            github: Some("https://github.com/janedoe".into()),
            location: Some("Berlin".into()),
            is_active: None,
        }
    }

    #[tokio::test]
    async fn duplicate_email_differing_in_case_is_rejected() {
        let service = ContactService::new(InMemoryContactRepository::default());

        service.create(draft("jane@example.com")).await.unwrap();
        let err = service.create(draft("JANE@example.com")).await.unwrap_err();

        let normalized = normalize(&err);
        assert_eq!(normalized.status.as_u16(), 400);
        assert_eq!(normalized.message, "Duplicate field value entered");
    }

    #[tokio::test]
    async fn missing_public_contact_is_404() {
        let service = ContactService::new(InMemoryContactRepository::default());

        let err = service.get_public().await.unwrap_err();
        assert_eq!(normalize(&err).message, "Contact not found");
    }

    #[tokio::test]
    async fn deactivate_unknown_is_contact_not_found() {
        let service = ContactService::new(InMemoryContactRepository::default());

        let err = service.deactivate(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(normalize(&err).status.as_u16(), 404);
    }
}
