// src/shared/api/response.rs
use actix_web::HttpResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::shared::errors::AppError;
use crate::shared::validation::is_valid_id;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            message: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            message: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            success: true,
            data: None,
            message: Some(message.to_string()),
        })
    }

    pub fn created_message(message: &str) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse::<()> {
            success: true,
            data: None,
            message: Some(message.to_string()),
        })
    }
}

/// Path ids arrive as raw strings so a malformed one is reported as a
/// missing resource rather than a routing failure.
pub fn parse_resource_id(raw: &str) -> Result<Uuid, AppError> {
    if !is_valid_id(raw) {
        return Err(AppError::MalformedId(raw.to_string()));
    }

    Uuid::parse_str(raw).map_err(|e| AppError::MalformedId(e.to_string()))
}
