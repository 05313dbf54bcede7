pub mod customer_repository;
pub mod memory;

pub use customer_repository::{CustomerRepository, MySqlCustomerRepository};
pub use memory::InMemoryCustomerRepository;
