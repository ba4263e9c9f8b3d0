use sea_orm::{sqlx, DbErr, RuntimeErr};
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::validation::{messages, Pagination};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Duplicate value: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Sorts a driver error into not-found, unique violation or generic failure.
pub fn map_db_err(err: DbErr) -> RepositoryError {
    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepositoryError::NotFound,
        other => match unique_violation(&other) {
            Some(detail) => RepositoryError::Duplicate(messages::duplicate(&detail)),
            None => RepositoryError::DatabaseError(other.to_string()),
        },
    }
}

const PG_UNIQUE_VIOLATION: &str = "23505";

/// Constraint name (or driver message) of a unique-key violation, if `err` is one.
fn unique_violation(err: &DbErr) -> Option<String> {
    let (DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db)))
    | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db)))) = err
    else {
        return None;
    };

    let unique = db.is_unique_violation() || db.code().as_deref() == Some(PG_UNIQUE_VIOLATION);
    unique.then(|| db.constraint().unwrap_or(db.message()).to_string())
}

/// `%term%` for ILIKE with the wildcard characters of `term` escaped.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// One page of a list query plus the totals a client needs to page further.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            items,
            page: pagination.page,
            limit: pagination.limit,
            total,
            pages: pagination.pages(total),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            pages: self.pages,
        }
    }
}
