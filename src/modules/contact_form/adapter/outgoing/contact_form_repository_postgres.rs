use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, Unchanged,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact_form::application::{
    domain::{ContactForm, ContactFormData, ContactFormFilter},
    ports::outgoing::ContactFormRepository,
};
use crate::shared::persistence::{map_db_err, PageResult, RepositoryError};
use crate::shared::validation::Pagination;

use super::sea_orm_entity::{
    ActiveModel as ContactFormActiveModel, Column as ContactFormColumn,
    Entity as ContactFormEntity,
};

#[derive(Debug, Clone)]
pub struct ContactFormRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactFormRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update(&self, active: ContactFormActiveModel) -> Result<ContactForm, RepositoryError> {
        let model = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }
}

#[async_trait]
impl ContactFormRepository for ContactFormRepositoryPostgres {
    async fn create(&self, data: ContactFormData) -> Result<ContactForm, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = ContactFormActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            phone: Set(data.phone),
            role: Set(data.role),
            company: Set(data.company),
            message: Set(data.message),
            is_read: Set(false),
            is_archived: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn list(
        &self,
        filter: ContactFormFilter,
        page: Pagination,
    ) -> Result<PageResult<ContactForm>, RepositoryError> {
        let mut query = ContactFormEntity::find();

        if let Some(is_read) = filter.is_read {
            query = query.filter(ContactFormColumn::IsRead.eq(is_read));
        }
        if let Some(is_archived) = filter.is_archived {
            query = query.filter(ContactFormColumn::IsArchived.eq(is_archived));
        }

        let query = query.order_by_desc(ContactFormColumn::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            models.into_iter().map(ContactForm::from).collect(),
            page,
            total,
        ))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactForm>, RepositoryError> {
        let model = ContactFormEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(ContactForm::from))
    }

    async fn set_read(&self, id: Uuid, is_read: bool) -> Result<ContactForm, RepositoryError> {
        self.update(ContactFormActiveModel {
            id: Unchanged(id),
            is_read: Set(is_read),
            ..Default::default()
        })
        .await
    }

    async fn set_archived(
        &self,
        id: Uuid,
        is_archived: bool,
    ) -> Result<ContactForm, RepositoryError> {
        self.update(ContactFormActiveModel {
            id: Unchanged(id),
            is_archived: Set(is_archived),
            ..Default::default()
        })
        .await
    }
}
