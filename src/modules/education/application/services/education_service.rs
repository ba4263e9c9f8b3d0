use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::education::application::{
    domain::{Education, EducationDraft},
    ports::{incoming::EducationUseCases, outgoing::EducationRepository},
};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::Pagination;

const RESOURCE: &str = "Education";

#[derive(Debug, Clone)]
pub struct EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    repository: R,
}

impl<R> EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> EducationUseCases for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn list(
        &self,
        active_only: bool,
        page: Pagination,
    ) -> Result<PageResult<Education>, AppError> {
        Ok(self.repository.list(active_only, page).await?)
    }

    async fn get_by_id(&self, id: Uuid, active_only: bool) -> Result<Education, AppError> {
        self.repository
            .find_by_id(id, active_only)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE))
    }

    async fn create(&self, draft: EducationDraft) -> Result<Education, AppError> {
        let data = draft.validate()?;
        let education = self.repository.create(data).await?;

        tracing::info!(education_id = %education.id, "Education created");
        Ok(education)
    }

    async fn replace(&self, id: Uuid, draft: EducationDraft) -> Result<Education, AppError> {
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

        tracing::info!(education_id = %id, "Education deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    use crate::modules::education::application::domain::EducationData;
    use crate::shared::errors::normalize;
    use crate::shared::persistence::RepositoryError;

    #[derive(Clone, Default)]
    struct MockEducationRepository {
        list_calls: Arc<Mutex<Vec<bool>>>,
        write_error: Option<RepositoryError>,
    }

    fn to_education(id: Uuid, data: EducationData) -> Education {
        let now = Utc::now();
        Education {
            id,
            degree: data.degree,
            institution: data.institution,
            duration: data.duration,
            location: data.location,
            description: data.description,
            order: data.order,
            is_active: data.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    #[async_trait]
    impl EducationRepository for MockEducationRepository {
        async fn list(
            &self,
            active_only: bool,
            page: Pagination,
        ) -> Result<PageResult<Education>, RepositoryError> {
            self.list_calls.lock().unwrap().push(active_only);
            Ok(PageResult::new(vec![], page, 0))
        }

        async fn find_by_id(
            &self,
            _id: Uuid,
            _active_only: bool,
        ) -> Result<Option<Education>, RepositoryError> {
            Ok(None)
        }

        async fn create(&self, data: EducationData) -> Result<Education, RepositoryError> {
            match &self.write_error {
                Some(err) => Err(err.clone()),
                None => Ok(to_education(Uuid::new_v4(), data)),
            }
        }

        async fn replace(
            &self,
            id: Uuid,
            data: EducationData,
        ) -> Result<Education, RepositoryError> {
            match &self.write_error {
                Some(err) => Err(err.clone()),
                None => Ok(to_education(id, data)),
            }
        }

        async fn set_active(
            &self,
            _id: Uuid,
            _is_active: bool,
        ) -> Result<Education, RepositoryError> {
            Err(self.write_error.clone().unwrap_or(RepositoryError::NotFound))
        }
    }

    fn valid_draft() -> EducationDraft {
        EducationDraft {
            degree: Some("BSc Computer Science".into()),
            institution: Some("Uni".into()),
            duration: Some("2014 - 2018".into()),
            location: Some("Berlin".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn list_forwards_scope() {
        let repo = MockEducationRepository::default();
        let service = EducationService::new(repo.clone());

        service.list(true, Pagination::default()).await.unwrap();
        service.list(false, Pagination::default()).await.unwrap();

        assert_eq!(*repo.list_calls.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn unknown_id_is_education_not_found() {
        let service = EducationService::new(MockEducationRepository::default());

        let err = service.get_by_id(Uuid::new_v4(), true).await.unwrap_err();
        assert_eq!(normalize(&err).message, "Education not found");

        let err = service.deactivate(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(normalize(&err).message, "Education not found");
    }

    #[tokio::test]
    async fn create_surfaces_duplicate_key() {
        let service = EducationService::new(MockEducationRepository {
            write_error: Some(RepositoryError::Duplicate("degree already exists".into())),
            ..Default::default()
        });

        let err = service.create(valid_draft()).await.unwrap_err();
        let normalized = normalize(&err);
        assert_eq!(normalized.status.as_u16(), 400);
        assert_eq!(normalized.message, "Duplicate field value entered");
    }

    #[tokio::test]
    async fn replace_returns_new_values() {
        let service = EducationService::new(MockEducationRepository::default());
        let id = Uuid::new_v4();

        let education = service
            .replace(
                id,
                EducationDraft {
                    order: 2.into(),
                    ..valid_draft()
                },
            )
            .await
            .unwrap();

        assert_eq!(education.id, id);
        assert_eq!(education.order, 2);
    }
}
