// src/shared/api/json_config.rs
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

use crate::shared::errors::AppError;

pub const JSON_BODY_LIMIT: usize = 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| AppError::from(err).into())
}

pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| AppError::from(err).into())
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| AppError::from(err).into())
}
