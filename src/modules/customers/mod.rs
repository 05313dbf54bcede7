// Customers module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Address, Customer, CustomerDto, CustomerUpdateDto, CustomerView};
pub use repositories::{CustomerRepository, InMemoryCustomerRepository, MySqlCustomerRepository};
pub use services::CustomerService;
