pub mod credit_repository;
pub mod memory;

pub use credit_repository::{CreditRepository, MySqlCreditRepository};
pub use memory::InMemoryCreditRepository;
