// CustomerRepository: persistence for customers
//
// Implements:
// - Insert with CPF uniqueness enforced by uk_customers_cpf
// - Point lookup by id and by CPF
// - Full-row update of the mutable fields
// - Delete by id (credits restrict deletion through fk_credits_customer)

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::{AppError, Result};
use crate::modules::customers::models::{Address, Customer};

/// Storage capability the customer service is built against
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer and return it with its generated id
    async fn insert(&self, customer: &Customer) -> Result<Customer>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>>;

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Customer>>;

    /// Persist names, income and address of an existing customer
    async fn update(&self, customer: &Customer) -> Result<Customer>;

    /// Remove a customer; `NotFound` when no row matches
    async fn delete(&self, id: i64) -> Result<()>;
}

/// MySQL-backed customer repository
#[derive(Clone)]
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn insert(&self, customer: &Customer) -> Result<Customer> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (
                first_name, last_name, cpf, email, income, password, zip_code, street
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.cpf)
        .bind(&customer.email)
        .bind(customer.income)
        .bind(&customer.password)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.street)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_write(e, format!("CPF {} already registered", customer.cpf))
        })?;

        let mut created = customer.clone();
        created.id = Some(result.last_insert_id() as i64);
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, cpf, email, income, password, zip_code, street
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CustomerRow::into_customer))
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, cpf, email, income, password, zip_code, street
            FROM customers
            WHERE cpf = ?
            "#,
        )
        .bind(cpf)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CustomerRow::into_customer))
    }

    async fn update(&self, customer: &Customer) -> Result<Customer> {
        let id = customer
            .id
            .ok_or_else(|| AppError::internal("Customer id is required for update"))?;

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET first_name = ?, last_name = ?, income = ?, zip_code = ?, street = ?
            WHERE id = ?
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(customer.income)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.street)
        .bind(id)
        .execute(&self.pool)
        .await?;

        // MySQL reports 0 affected rows when values are unchanged, so confirm existence
        if result.rows_affected() == 0 && self.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(format!("Customer {} not found", id)));
        }

        Ok(customer.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::from_write(e, format!("Customer {} still owns credits", id))
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Customer {} not found", id)));
        }

        Ok(())
    }
}

// Helper struct for database mapping

#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    first_name: String,
    last_name: String,
    cpf: String,
    email: String,
    income: Decimal,
    password: String,
    zip_code: String,
    street: String,
}

impl CustomerRow {
    fn into_customer(self) -> Customer {
        Customer {
            id: Some(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            cpf: self.cpf,
            email: self.email,
            income: self.income,
            password: self.password,
            address: Address {
                zip_code: self.zip_code,
                street: self.street,
            },
            credits: Vec::new(),
        }
    }
}
