use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::customers::models::{CustomerDto, CustomerUpdateDto, CustomerView};
use crate::modules::customers::services::CustomerService;

/// Query string for PATCH /api/customers
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerIdQuery {
    pub customer_id: i64,
}

/// Create a new customer
/// POST /api/customers
pub async fn create_customer(
    service: web::Data<Arc<CustomerService>>,
    request: web::Json<CustomerDto>,
) -> Result<HttpResponse, AppError> {
    let customer = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(CustomerView::from(customer)))
}

/// Get customer by ID
/// GET /api/customers/{id}
pub async fn get_customer(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let customer = service.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(CustomerView::from(customer)))
}

/// Partially update a customer
/// PATCH /api/customers?customerId={id}
pub async fn update_customer(
    service: web::Data<Arc<CustomerService>>,
    query: web::Query<CustomerIdQuery>,
    request: web::Json<CustomerUpdateDto>,
) -> Result<HttpResponse, AppError> {
    let customer = service
        .update(query.customer_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(CustomerView::from(customer)))
}

/// Delete a customer
/// DELETE /api/customers/{id}
pub async fn delete_customer(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/customers")
            .route("", web::post().to(create_customer))
            .route("", web::patch().to(update_customer))
            .route("/{id}", web::get().to(get_customer))
            .route("/{id}", web::delete().to(delete_customer)),
    );
}
