use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, Unchanged,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::application::{
    domain::{Contact, ContactData},
    ports::outgoing::ContactRepository,
};
use crate::shared::persistence::{map_db_err, PageResult, RepositoryError};
use crate::shared::validation::Pagination;

use super::sea_orm_entity::{
    ActiveModel as ContactActiveModel, Column as ContactColumn, Entity as ContactEntity,
};

#[derive(Debug, Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active_model(data: ContactData) -> ContactActiveModel {
        ContactActiveModel {
            email: Set(data.email),
            phone: Set(data.phone),
            linkedin: Set(data.linkedin),
            github: Set(data.github),
            location: Set(data.location),
            is_active: Set(data.is_active),
            ..Default::default()
        }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn find_latest_active(&self) -> Result<Option<Contact>, RepositoryError> {
        let model = ContactEntity::find()
            .filter(ContactColumn::IsActive.eq(true))
            .order_by_desc(ContactColumn::UpdatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Contact::from))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, RepositoryError> {
        let model = ContactEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Contact::from))
    }

    async fn list(&self, page: Pagination) -> Result<PageResult<Contact>, RepositoryError> {
        let query = ContactEntity::find().order_by_desc(ContactColumn::UpdatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        let models = query
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult::new(
            models.into_iter().map(Contact::from).collect(),
            page,
            total,
        ))
    }

    async fn create(&self, data: ContactData) -> Result<Contact, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut active = Self::active_model(data);
        active.id = Set(Uuid::new_v4());
        active.created_at = Set(now);
        active.updated_at = Set(now);

        let model = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn replace(&self, id: Uuid, data: ContactData) -> Result<Contact, RepositoryError> {
        let mut active = Self::active_model(data);
        active.id = Unchanged(id);

        let model = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Contact, RepositoryError> {
        let active = ContactActiveModel {
            id: Unchanged(id),
            is_active: Set(is_active),
            ..Default::default()
        };

        let model = active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::adapter::outgoing::sea_orm_entity::Model as ContactModel;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    fn contact_model() -> ContactModel {
        let now = Utc::now().fixed_offset();
        ContactModel {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            phone: "+49 30 1234567".to_string(),
            linkedin: "https://linkedin.com/in/janedoe".to_string(),
            github: "https://github.com/janedoe".to_string(),
            location: "Berlin".to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_latest_active() {
        let model = contact_model();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();
        let repo = ContactRepositoryPostgres::new(Arc::new(db));

        let contact = repo.find_latest_active().await.unwrap().unwrap();
        assert_eq!(contact.email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_find_by_id_error_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("timeout".into()))])
            .into_connection();
        let repo = ContactRepositoryPostgres::new(Arc::new(db));

        let result = repo.find_by_id(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_replace_returns_row() {
        let model = contact_model();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();
        let repo = ContactRepositoryPostgres::new(Arc::new(db));

        let data = ContactData {
            email: model.email.clone(),
            phone: model.phone.clone(),
            linkedin: model.linkedin.clone(),
            github: model.github.clone(),
            location: model.location.clone(),
            is_active: true,
        };

        let contact = repo.replace(model.id, data).await.unwrap();
        assert_eq!(contact.id, model.id);
    }
}
