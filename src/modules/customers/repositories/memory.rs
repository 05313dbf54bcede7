use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CustomerRepository;
use crate::core::{AppError, Result};
use crate::modules::customers::models::Customer;

#[derive(Default)]
struct Customers {
    next_id: i64,
    rows: BTreeMap<i64, Customer>,
}

/// Customer store held in process memory, with the same uniqueness rules as MySQL
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<Customers>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.customers.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn insert(&self, customer: &Customer) -> Result<Customer> {
        let mut customers = self.customers.write().await;
        if customers.rows.values().any(|c| c.cpf == customer.cpf) {
            return Err(AppError::conflict(format!(
                "CPF {} already registered",
                customer.cpf
            )));
        }

        customers.next_id += 1;
        let id = customers.next_id;
        let mut created = customer.clone();
        created.id = Some(id);
        created.credits.clear();
        customers.rows.insert(id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.rows.get(&id).cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.rows.values().find(|c| c.cpf == cpf).cloned())
    }

    async fn update(&self, customer: &Customer) -> Result<Customer> {
        let id = customer
            .id
            .ok_or_else(|| AppError::internal("Customer id is required for update"))?;

        let mut customers = self.customers.write().await;
        let stored = customers
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Customer {} not found", id)))?;

        stored.first_name = customer.first_name.clone();
        stored.last_name = customer.last_name.clone();
        stored.income = customer.income;
        stored.address = customer.address.clone();

        Ok(customer.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut customers = self.customers.write().await;
        customers
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Customer {} not found", id)))
    }
}
