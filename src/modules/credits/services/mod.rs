pub mod credit_rules;
pub mod credit_service;

pub use credit_rules::CreditRules;
pub use credit_service::CreditService;
