// Service wiring shared by the binary and the HTTP test harness

use std::sync::Arc;

use actix_web::error::JsonPayloadError;
use actix_web::web;
use sqlx::MySqlPool;

use crate::config::CreditConfig;
use crate::core::{AppError, Clock, SystemClock};
use crate::modules::credits::{
    self, CreditRepository, CreditRules, CreditService, InMemoryCreditRepository,
    MySqlCreditRepository,
};
use crate::modules::customers::{
    self, CustomerRepository, CustomerService, InMemoryCustomerRepository,
    MySqlCustomerRepository,
};
use crate::modules::health;

/// The application's services, ready to be registered on an actix `App`
#[derive(Clone)]
pub struct Services {
    pub customers: Arc<CustomerService>,
    pub credits: Arc<CreditService>,
}

impl Services {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        credit_repo: Arc<dyn CreditRepository>,
        credit_config: CreditConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let customers = Arc::new(CustomerService::new(customer_repo, credit_repo.clone()));
        let credits = Arc::new(CreditService::new(
            credit_repo,
            customers.clone(),
            CreditRules::new(credit_config),
            clock,
        ));

        Self { customers, credits }
    }

    /// Services backed by MySQL, using the wall clock
    pub fn mysql(pool: MySqlPool, credit_config: CreditConfig) -> Self {
        Self::new(
            Arc::new(MySqlCustomerRepository::new(pool.clone())),
            Arc::new(MySqlCreditRepository::new(pool)),
            credit_config,
            Arc::new(SystemClock),
        )
    }

    /// Services backed by process memory
    pub fn in_memory(credit_config: CreditConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            Arc::new(InMemoryCustomerRepository::new()),
            Arc::new(InMemoryCreditRepository::new()),
            credit_config,
            clock,
        )
    }

    /// Register services, extractor error handling and every route
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.customers.clone()))
            .app_data(web::Data::new(self.credits.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                match err {
                    JsonPayloadError::Deserialize(e) => AppError::Json(e),
                    other => AppError::validation(format!("Invalid request body: {}", other)),
                }
                .into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                AppError::validation(format!("Invalid query string: {}", err)).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                AppError::validation(format!("Invalid path parameter: {}", err)).into()
            }))
            .configure(health::configure)
            .configure(customers::configure)
            .configure(credits::configure);
    }
}
