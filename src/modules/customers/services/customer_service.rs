use std::sync::Arc;

use tracing::{info, warn};

use crate::core::password::hash_password;
use crate::core::{AppError, Result};
use crate::modules::credits::repositories::CreditRepository;
use crate::modules::customers::models::{Customer, CustomerDto, CustomerUpdateDto};
use crate::modules::customers::repositories::CustomerRepository;

/// Service for customer business logic
pub struct CustomerService {
    customer_repo: Arc<dyn CustomerRepository>,
    credit_repo: Arc<dyn CreditRepository>,
}

impl CustomerService {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        credit_repo: Arc<dyn CreditRepository>,
    ) -> Self {
        Self {
            customer_repo,
            credit_repo,
        }
    }

    /// Register a new customer
    ///
    /// # Errors
    /// * `Validation` - empty names, malformed CPF/email, negative income
    /// * `Conflict` - CPF already registered
    pub async fn create(&self, request: CustomerDto) -> Result<Customer> {
        let mut customer = request.into_entity()?;

        // Pre-check only; the unique index decides under concurrent inserts
        if self.customer_repo.find_by_cpf(&customer.cpf).await?.is_some() {
            warn!(cpf = %customer.cpf, "Rejected duplicate CPF");
            return Err(AppError::conflict(format!(
                "CPF {} already registered",
                customer.cpf
            )));
        }

        customer.password = hash_password(&customer.password)?;
        let created = self.customer_repo.insert(&customer).await?;

        info!(customer_id = ?created.id, "Customer created");
        Ok(created)
    }

    /// Get customer by id, with the codes of the credits it owns
    pub async fn find_by_id(&self, id: i64) -> Result<Customer> {
        let mut customer = self
            .customer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Customer {} not found", id)))?;

        customer.credits = self
            .credit_repo
            .find_all_by_customer_id(id)
            .await?
            .into_iter()
            .map(|credit| credit.credit_code)
            .collect();

        Ok(customer)
    }

    /// Overwrite first/last name, income and address of an existing customer
    pub async fn update(&self, id: i64, request: CustomerUpdateDto) -> Result<Customer> {
        let mut customer = self.find_by_id(id).await?;
        request.apply_to(&mut customer)?;

        let updated = self.customer_repo.update(&customer).await?;

        info!(customer_id = id, "Customer updated");
        Ok(updated)
    }

    /// Delete a customer that owns no credits
    ///
    /// # Errors
    /// * `NotFound` - no such customer (including a repeated delete)
    /// * `Conflict` - the customer still owns credits
    pub async fn delete(&self, id: i64) -> Result<()> {
        let customer = self.find_by_id(id).await?;

        if !customer.credits.is_empty() {
            warn!(
                customer_id = id,
                credits = customer.credits.len(),
                "Refused to delete customer with credits"
            );
            return Err(AppError::conflict(format!(
                "Customer {} still owns {} credit(s)",
                id,
                customer.credits.len()
            )));
        }

        self.customer_repo.delete(id).await?;

        info!(customer_id = id, "Customer deleted");
        Ok(())
    }
}
