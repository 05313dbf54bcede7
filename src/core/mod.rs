pub mod amount;
pub mod clock;
pub mod error;
pub mod password;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AppError, Result};
