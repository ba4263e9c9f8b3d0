use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::hero::application::{
    domain::{Hero, HeroDraft},
    ports::{incoming::HeroUseCases, outgoing::HeroRepository},
};
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::Pagination;

const RESOURCE: &str = "Hero";

#[derive(Debug, Clone)]
pub struct HeroService<R>
where
    R: HeroRepository + Send + Sync,
{
    repository: R,
}

impl<R> HeroService<R>
where
    R: HeroRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> HeroUseCases for HeroService<R>
where
    R: HeroRepository + Send + Sync,
{
    async fn get_public(&self) -> Result<Hero, AppError> {
        self.repository
            .find_latest_active()
            .await
            .map_err(|e| AppError::from_repository(RESOURCE, e))?
            .ok_or_else(|| AppError::not_found(RESOURCE))
    }

    async fn list(&self, page: Pagination) -> Result<PageResult<Hero>, AppError> {
        Ok(self.repository.list(page).await?)
    }

    async fn create(&self, draft: HeroDraft) -> Result<Hero, AppError> {
        let data = draft.validate()?;
        let hero = self.repository.create(data).await?;

        tracing::info!(hero_id = %hero.id, "Hero created");
        Ok(hero)
    }

    async fn replace(&self, id: Uuid, draft: HeroDraft) -> Result<Hero, AppError> {
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

        tracing::info!(hero_id = %id, "Hero deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    use crate::modules::hero::application::domain::HeroData;
    use crate::shared::errors::normalize;
    use crate::shared::persistence::RepositoryError;

    // ──────────────────────────────────────────────────────────
    // Mock Repository
    // ──────────────────────────────────────────────────────────

    #[derive(Clone, Default)]
    struct MockHeroRepository {
        latest: Option<Hero>,
        write_result: Option<Result<Hero, RepositoryError>>,
        writes: Arc<Mutex<Vec<HeroData>>>,
    }

    impl MockHeroRepository {
        fn with_latest(hero: Hero) -> Self {
            Self {
                latest: Some(hero),
                ..Default::default()
            }
        }

        fn writes_return(result: Result<Hero, RepositoryError>) -> Self {
            Self {
                write_result: Some(result),
                ..Default::default()
            }
        }

        fn write_outcome(&self) -> Result<Hero, RepositoryError> {
            self.write_result
                .clone()
                .unwrap_or(Err(RepositoryError::DatabaseError("not configured".into())))
        }
    }

    #[async_trait]
    impl HeroRepository for MockHeroRepository {
        async fn find_latest_active(&self) -> Result<Option<Hero>, RepositoryError> {
            Ok(self.latest.clone())
        }

        async fn list(&self, page: Pagination) -> Result<PageResult<Hero>, RepositoryError> {
            let items: Vec<Hero> = self.latest.clone().into_iter().collect();
            let total = items.len() as u64;
            Ok(PageResult::new(items, page, total))
        }

        async fn create(&self, data: HeroData) -> Result<Hero, RepositoryError> {
            self.writes.lock().unwrap().push(data);
            self.write_outcome()
        }

        async fn replace(&self, _id: Uuid, data: HeroData) -> Result<Hero, RepositoryError> {
            self.writes.lock().unwrap().push(data);
            self.write_outcome()
        }

        async fn set_active(&self, _id: Uuid, _is_active: bool) -> Result<Hero, RepositoryError> {
            self.write_outcome()
        }
    }

    // ──────────────────────────────────────────────────────────
    // Helpers
    // ──────────────────────────────────────────────────────────

    fn sample_hero() -> Hero {
        let now = Utc::now();
        Hero {
            id: Uuid::new_v4(),
            name: "Jane Doe".into(),
            title: "Backend Engineer".into(),
            bio: "Builds APIs.".into(),
            years_experience: 7,
            cv_url: None,
            profile_image: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn valid_draft() -> HeroDraft {
        HeroDraft {
            name: Some("Jane Doe".into()),
            title: Some("Backend Engineer".into()),
            bio: Some("Builds APIs.".into()),
            years_experience: 7.into(),
            ..Default::default()
        }
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn get_public_returns_latest_active() {
        let hero = sample_hero();
        let service = HeroService::new(MockHeroRepository::with_latest(hero.clone()));

        assert_eq!(service.get_public().await.unwrap(), hero);
    }

    #[tokio::test]
    async fn get_public_without_hero_is_not_found() {
        let service = HeroService::new(MockHeroRepository::default());

        let err = service.get_public().await.unwrap_err();
        let normalized = normalize(&err);
        assert_eq!(normalized.status.as_u16(), 404);
        assert_eq!(normalized.message, "Hero not found");
    }

    #[tokio::test]
    async fn create_validates_before_writing() {
        let repo = MockHeroRepository::writes_return(Ok(sample_hero()));
        let service = HeroService::new(repo.clone());

        let err = service.create(HeroDraft::default()).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(repo.writes.lock().unwrap().is_empty(), "nothing may be written");
    }

    #[tokio::test]
    async fn create_persists_validated_data() {
        let repo = MockHeroRepository::writes_return(Ok(sample_hero()));
        let service = HeroService::new(repo.clone());

        service.create(valid_draft()).await.unwrap();

        let writes = repo.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].name, "Jane Doe");
        assert!(writes[0].is_active);
    }

    #[tokio::test]
    async fn replace_unknown_id_is_hero_not_found() {
        let service =
            HeroService::new(MockHeroRepository::writes_return(Err(RepositoryError::NotFound)));

        let err = service.replace(Uuid::new_v4(), valid_draft()).await.unwrap_err();
        assert_eq!(normalize(&err).message, "Hero not found");
    }

    #[tokio::test]
    async fn deactivate_propagates_database_errors() {
        let service = HeroService::new(MockHeroRepository::writes_return(Err(
            RepositoryError::DatabaseError("connection reset".into()),
        )));

        let err = service.deactivate(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
