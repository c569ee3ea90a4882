//! Service layer providing the employee CRUD operations on top of models.
//! - Separates business logic from data access through `EmployeeRepository`.
//! - Reuses entity definitions from the `models` crate.

pub mod errors;
pub mod employee;
#[cfg(test)]
pub mod test_support;
