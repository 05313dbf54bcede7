use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::credits::models::{CreditDto, CreditSummary};
use crate::modules::credits::services::CreditService;

/// Query string carrying the requesting customer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerQuery {
    pub customer_id: i64,
}

/// Register a credit
/// POST /api/credits
pub async fn create_credit(
    service: web::Data<Arc<CreditService>>,
    request: web::Json<CreditDto>,
) -> Result<HttpResponse, AppError> {
    let credit = service.create(request.into_inner()).await?;
    let view = service.to_view(credit).await?;

    Ok(HttpResponse::Created().json(view))
}

/// List a customer's credits
/// GET /api/credits?customerId={id}
pub async fn list_credits(
    service: web::Data<Arc<CreditService>>,
    query: web::Query<CustomerQuery>,
) -> Result<HttpResponse, AppError> {
    let credits: Vec<CreditSummary> = service
        .find_all_by_customer(query.customer_id)
        .await?
        .into_iter()
        .map(CreditSummary::from)
        .collect();

    Ok(HttpResponse::Ok().json(credits))
}

/// Get one credit of a customer
/// GET /api/credits/{creditCode}?customerId={id}
pub async fn get_credit(
    service: web::Data<Arc<CreditService>>,
    path: web::Path<Uuid>,
    query: web::Query<CustomerQuery>,
) -> Result<HttpResponse, AppError> {
    let credit = service
        .find_owned_credit(query.customer_id, path.into_inner())
        .await?;
    let view = service.to_view(credit).await?;

    Ok(HttpResponse::Ok().json(view))
}

/// Configure credit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/credits")
            .route("", web::post().to(create_credit))
            .route("", web::get().to(list_credits))
            .route("/{credit_code}", web::get().to(get_credit)),
    );
}
