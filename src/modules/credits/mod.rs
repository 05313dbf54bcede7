// Credits module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Credit, CreditDto, CreditStatus, CreditSummary, CreditView};
pub use repositories::{CreditRepository, InMemoryCreditRepository, MySqlCreditRepository};
pub use services::{CreditRules, CreditService};
