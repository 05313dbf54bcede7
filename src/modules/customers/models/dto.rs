use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::customer::{Address, Customer};
use crate::core::Result;

/// Request body for POST /api/customers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub income: Decimal,
    pub password: String,
    pub zip_code: String,
    pub street: String,
}

impl CustomerDto {
    /// Validate and map into an unsaved entity (password still plain)
    pub fn into_entity(self) -> Result<Customer> {
        let address = Address::new(self.zip_code, self.street)?;
        Customer::new(
            self.first_name,
            self.last_name,
            self.cpf,
            self.email,
            self.income,
            self.password,
            address,
        )
    }
}

/// Request body for PATCH /api/customers?customerId=
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateDto {
    pub first_name: String,
    pub last_name: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

impl CustomerUpdateDto {
    pub fn apply_to(self, customer: &mut Customer) -> Result<()> {
        let address = Address::new(self.zip_code, self.street)?;
        customer.apply_update(self.first_name, self.last_name, self.income, address)
    }
}

/// Customer representation returned to clients; never carries the password
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub income: Decimal,
    pub email: String,
    pub zip_code: String,
    pub street: String,
    pub credits: Vec<Uuid>,
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.unwrap_or_default(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            cpf: customer.cpf,
            income: customer.income,
            email: customer.email,
            zip_code: customer.address.zip_code,
            street: customer.address.street,
            credits: customer.credits,
        }
    }
}
