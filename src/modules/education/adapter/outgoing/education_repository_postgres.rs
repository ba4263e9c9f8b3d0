use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, Unchanged,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::education::application::{
    domain::{Education, EducationData},
    ports::outgoing::EducationRepository,
};
use crate::shared::persistence::{map_db_err, PageResult, RepositoryError};
use crate::shared::validation::Pagination;

use super::sea_orm_entity::{
    ActiveModel as EducationActiveModel, Column as EducationColumn, Entity as EducationEntity,
};

#[derive(Debug, Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active_model(data: EducationData) -> EducationActiveModel {
        EducationActiveModel {
            degree: Set(data.degree),
            institution: Set(data.institution),
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
impl EducationRepository for EducationRepositoryPostgres {
    async fn list(
        &self,
        active_only: bool,
        page: Pagination,
    ) -> Result<PageResult<Education>, RepositoryError> {
        let mut query = EducationEntity::find();
        if active_only {
            query = query.filter(EducationColumn::IsActive.eq(true));
        }

        let query = query
            .order_by_asc(EducationColumn::Order)
            .order_by_desc(EducationColumn::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            models.into_iter().map(Education::from).collect(),
            page,
            total,
        ))
    }

    async fn find_by_id(
        &self,
        id: Uuid,
        active_only: bool,
    ) -> Result<Option<Education>, RepositoryError> {
        let mut query = EducationEntity::find_by_id(id);
        if active_only {
            query = query.filter(EducationColumn::IsActive.eq(true));
        }

        let model = query.one(&*self.db).await.map_err(map_db_err)?;
        Ok(model.map(Education::from))
    }

    async fn create(&self, data: EducationData) -> Result<Education, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut active = Self::active_model(data);
        active.id = Set(Uuid::new_v4());
        active.created_at = Set(now);
        active.updated_at = Set(now);

        let model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn replace(&self, id: Uuid, data: EducationData) -> Result<Education, RepositoryError> {
        let mut active = Self::active_model(data);
        active.id = Unchanged(id);

        let model = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Education, RepositoryError> {
        let active = EducationActiveModel {
            id: Unchanged(id),
            is_active: Set(is_active),
            ..Default::default()
        };

        let model = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }
}
