pub mod repository;
pub mod service;

pub use repository::{EmployeeRepository, SeaOrmEmployeeRepository};
pub use service::{EmployeeService, SharedEmployeeService};
