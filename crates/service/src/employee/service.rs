use std::sync::Arc;
use tracing::{info, instrument};

use models::employee::{self, EmployeeInput};
use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;

/// Employee CRUD independent of the web framework.
///
/// Absence is reported as `None`/`false`, never as an error; only storage
/// failures produce `Err`.
pub struct EmployeeService<R: EmployeeRepository + ?Sized> {
    repo: Arc<R>,
}

/// Type-erased service shared through the HTTP state.
pub type SharedEmployeeService = Arc<EmployeeService<dyn EmployeeRepository>>;

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all(&self) -> Result<Vec<employee::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<employee::Model>, ServiceError> {
        self.repo.get(id).await
    }

    /// Insert a new employee; the store assigns `id`.
    ///
    /// # Examples
    /// ```
    /// use service::employee::{EmployeeService, repository::mock::MockEmployeeRepository};
    /// use models::employee::EmployeeInput;
    /// use std::sync::Arc;
    /// let svc = EmployeeService::new(Arc::new(MockEmployeeRepository::default()));
    /// let input = EmployeeInput {
    ///     first_name: "Ann".into(),
    ///     last_name: "Lee".into(),
    ///     email: "ann@x.com".into(),
    ///     date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
    ///     position: "Engineer".into(),
    ///     salary: 90000.0,
    /// };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: EmployeeInput) -> Result<employee::Model, ServiceError> {
        let created = self.repo.insert(input).await?;
        info!(id = created.id, "employee_created");
        Ok(created)
    }

    /// Overwrite every mutable field of `id`; `None` if it does not exist.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: EmployeeInput) -> Result<Option<employee::Model>, ServiceError> {
        let updated = self.repo.update(id, input).await?;
        match &updated {
            Some(_) => info!("employee_updated"),
            None => info!("employee_update_missing"),
        }
        Ok(updated)
    }

    /// `true` if the employee existed and was removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!("employee_deleted");
        } else {
            info!("employee_delete_missing");
        }
        Ok(deleted)
    }
}
