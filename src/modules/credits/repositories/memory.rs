use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::CreditRepository;
use crate::core::{AppError, Result};
use crate::modules::credits::models::Credit;

#[derive(Default)]
struct Credits {
    next_id: i64,
    rows: Vec<Credit>,
}

/// Credit store held in process memory; rows keep insertion order
#[derive(Default)]
pub struct InMemoryCreditRepository {
    credits: RwLock<Credits>,
}

impl InMemoryCreditRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CreditRepository for InMemoryCreditRepository {
    async fn insert(&self, credit: &Credit) -> Result<Credit> {
        let mut credits = self.credits.write().await;
        if credits
            .rows
            .iter()
            .any(|c| c.credit_code == credit.credit_code)
        {
            return Err(AppError::conflict(format!(
                "Credit {} already exists",
                credit.credit_code
            )));
        }

        credits.next_id += 1;
        let mut created = credit.clone();
        created.id = Some(credits.next_id);
        credits.rows.push(created.clone());

        Ok(created)
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>> {
        let credits = self.credits.read().await;
        Ok(credits
            .rows
            .iter()
            .find(|c| c.credit_code == credit_code)
            .cloned())
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>> {
        let credits = self.credits.read().await;
        Ok(credits
            .rows
            .iter()
            .filter(|c| c.customer_id == customer_id)
            .cloned()
            .collect())
    }
}
