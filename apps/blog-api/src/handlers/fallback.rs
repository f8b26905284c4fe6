//! Responses for requests that match no route or no method.

use actix_web::{HttpRequest, HttpResponse};

use crate::middleware::error::{AppError, AppResult};

/// Default service for unmatched paths.
pub async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    tracing::debug!(method = %req.method(), path = %req.path(), "No route matched");
    Err(AppError::NotFound("Resource not found".to_string()))
}

/// Default service of every resource: the path exists, the method does not.
pub async fn method_not_allowed(req: HttpRequest) -> AppResult<HttpResponse> {
    tracing::debug!(method = %req.method(), path = %req.path(), "Method not allowed");
    Err(AppError::MethodNotAllowed)
}
