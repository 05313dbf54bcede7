use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::core::{AppError, Clock, Result};
use crate::modules::credits::models::{Credit, CreditDto, CreditView};
use crate::modules::credits::repositories::CreditRepository;
use crate::modules::credits::services::CreditRules;
use crate::modules::customers::services::CustomerService;

/// Service for credit business logic
pub struct CreditService {
    credit_repo: Arc<dyn CreditRepository>,
    customer_service: Arc<CustomerService>,
    rules: CreditRules,
    clock: Arc<dyn Clock>,
}

impl CreditService {
    pub fn new(
        credit_repo: Arc<dyn CreditRepository>,
        customer_service: Arc<CustomerService>,
        rules: CreditRules,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            credit_repo,
            customer_service,
            rules,
            clock,
        }
    }

    /// Register a credit for an existing customer
    ///
    /// The customer is resolved before any rule runs, so an unknown
    /// customer is reported as `NotFound` even when the terms are invalid.
    ///
    /// # Errors
    /// * `NotFound` - the customer does not exist
    /// * `Validation` - value, installment count or first installment date out of bounds
    /// * `Conflict` - generated credit code collided at the storage layer
    pub async fn create(&self, request: CreditDto) -> Result<Credit> {
        self.customer_service.find_by_id(request.customer_id).await?;

        self.rules.validate(
            request.credit_value,
            request.day_first_installment,
            request.number_of_installments,
            self.clock.today(),
        )?;

        let credit = request.into_entity();
        let created = self.credit_repo.insert(&credit).await?;

        info!(
            credit_code = %created.credit_code,
            customer_id = created.customer_id,
            "Credit created"
        );
        Ok(created)
    }

    /// Get credit by its code
    pub async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Credit> {
        self.credit_repo
            .find_by_credit_code(credit_code)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Credit {} not found", credit_code)))
    }

    /// Get credit by its code, checking it belongs to `customer_id`
    pub async fn find_owned_credit(&self, customer_id: i64, credit_code: Uuid) -> Result<Credit> {
        let credit = self.find_by_credit_code(credit_code).await?;

        if credit.customer_id != customer_id {
            warn!(
                credit_code = %credit_code,
                customer_id,
                owner_id = credit.customer_id,
                "Credit requested by non-owner"
            );
            return Err(AppError::validation("Contact admin"));
        }

        Ok(credit)
    }

    /// All credits owned by a customer; empty when none
    pub async fn find_all_by_customer(&self, customer_id: i64) -> Result<Vec<Credit>> {
        self.credit_repo.find_all_by_customer_id(customer_id).await
    }

    /// Attach the owner's contact data to a credit
    pub async fn to_view(&self, credit: Credit) -> Result<CreditView> {
        let customer = self.customer_service.find_by_id(credit.customer_id).await?;
        Ok(CreditView::new(credit, &customer))
    }
}
