use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, Unchanged,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::application::{
    domain::{Experience, ExperienceData, ExperienceFilter},
    ports::outgoing::ExperienceRepository,
};
use crate::shared::persistence::{like_pattern, map_db_err, PageResult, RepositoryError};
use crate::shared::validation::Pagination;

use super::sea_orm_entity::{
    ActiveModel as ExperienceActiveModel, Column as ExperienceColumn,
    Entity as ExperienceEntity,
};

#[derive(Debug, Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active_model(data: ExperienceData) -> ExperienceActiveModel {
        ExperienceActiveModel {
            title: Set(data.title),
            company: Set(data.company),
            website: Set(data.website),
            duration: Set(data.duration),
            location: Set(data.location),
            description: Set(data.description),
            order: Set(data.order),
            is_active: Set(data.is_active),
            ..Default::default()
        }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(
        &self,
        filter: ExperienceFilter,
        page: Pagination,
    ) -> Result<PageResult<Experience>, RepositoryError> {
        let mut query = ExperienceEntity::find();

        if filter.active_only {
            query = query.filter(ExperienceColumn::IsActive.eq(true));
        }

        if let Some(ref search) = filter.search {
            let pattern = like_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(ExperienceColumn::Company).ilike(&pattern))
                    .add(Expr::col(ExperienceColumn::Title).ilike(&pattern))
                    .add(Expr::col(ExperienceColumn::Description).ilike(&pattern)),
            );
        }

        let query = query
            .order_by_asc(ExperienceColumn::Order)
            .order_by_desc(ExperienceColumn::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            models.into_iter().map(Experience::from).collect(),
            page,
            total,
        ))
    }

    async fn find_by_id(
        &self,
        id: Uuid,
        active_only: bool,
    ) -> Result<Option<Experience>, RepositoryError> {
        let mut query = ExperienceEntity::find_by_id(id);
        if active_only {
            query = query.filter(ExperienceColumn::IsActive.eq(true));
        }

        let model = query.one(&*self.db).await.map_err(map_db_err)?;
        Ok(model.map(Experience::from))
    }

    async fn create(&self, data: ExperienceData) -> Result<Experience, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut active = Self::active_model(data);
        active.id = Set(Uuid::new_v4());
        active.created_at = Set(now);
        active.updated_at = Set(now);

        let model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn replace(
        &self,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<Experience, RepositoryError> {
        let mut active = Self::active_model(data);
        active.id = Unchanged(id);

        let model = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Experience, RepositoryError> {
        let active = ExperienceActiveModel {
            id: Unchanged(id),
            is_active: Set(is_active),
            ..Default::default()
        };

        let model = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }
}
