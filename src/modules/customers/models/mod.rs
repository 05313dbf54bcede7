pub mod customer;
pub mod dto;

pub use customer::{cpf_check_digit, is_valid_cpf, Address, Customer};
pub use dto::{CustomerDto, CustomerUpdateDto, CustomerView};
