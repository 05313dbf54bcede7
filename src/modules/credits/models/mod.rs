pub mod credit;
pub mod dto;

pub use credit::{Credit, CreditStatus};
pub use dto::{CreditDto, CreditSummary, CreditView};
