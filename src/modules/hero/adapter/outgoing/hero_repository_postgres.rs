use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, Unchanged,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::hero::application::{
    domain::{Hero, HeroData},
    ports::outgoing::HeroRepository,
};
use crate::shared::persistence::{map_db_err, PageResult, RepositoryError};
use crate::shared::validation::Pagination;

use super::sea_orm_entity::{
    ActiveModel as HeroActiveModel, Column as HeroColumn, Entity as HeroEntity,
};

#[derive(Debug, Clone)]
pub struct HeroRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HeroRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active_model(data: HeroData) -> HeroActiveModel {
        HeroActiveModel {
            name: Set(data.name),
            title: Set(data.title),
            bio: Set(data.bio),
            years_experience: Set(data.years_experience),
            cv_url: Set(data.cv_url),
            profile_image: Set(data.profile_image),
            is_active: Set(data.is_active),
            ..Default::default()
        }
    }
}

#[async_trait]
impl HeroRepository for HeroRepositoryPostgres {
    async fn find_latest_active(&self) -> Result<Option<Hero>, RepositoryError> {
        let model = HeroEntity::find()
            .filter(HeroColumn::IsActive.eq(true))
            .order_by_desc(HeroColumn::UpdatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Hero::from))
    }

    async fn list(&self, page: Pagination) -> Result<PageResult<Hero>, RepositoryError> {
        let query = HeroEntity::find().order_by_desc(HeroColumn::UpdatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            models.into_iter().map(Hero::from).collect(),
            page,
            total,
        ))
    }

    async fn create(&self, data: HeroData) -> Result<Hero, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut active = Self::active_model(data);
        active.id = Set(Uuid::new_v4());
        active.created_at = Set(now);
        active.updated_at = Set(now);

        let model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn replace(&self, id: Uuid, data: HeroData) -> Result<Hero, RepositoryError> {
        let mut active = Self::active_model(data);
        active.id = Unchanged(id);

        let model = active
            .update(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Hero, RepositoryError> {
        let active = HeroActiveModel {
            id: Unchanged(id),
            is_active: Set(is_active),
            ..Default::default()
        };

        let model = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }
}
