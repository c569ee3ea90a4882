use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use models::employee::{self, EmployeeInput};
use crate::errors::ServiceError;

/// Persistence operations over the `employees` table.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<employee::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<employee::Model>, ServiceError>;
    async fn insert(&self, input: EmployeeInput) -> Result<employee::Model, ServiceError>;
    /// `None` when no row has `id`; nothing is written in that case.
    async fn update(&self, id: i32, input: EmployeeInput) -> Result<Option<employee::Model>, ServiceError>;
    /// `true` if a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn list(&self) -> Result<Vec<employee::Model>, ServiceError> {
        let rows = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<employee::Model>, ServiceError> {
        Ok(employee::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, input: EmployeeInput) -> Result<employee::Model, ServiceError> {
        Ok(employee::create(&self.db, input).await?)
    }

    async fn update(&self, id: i32, input: EmployeeInput) -> Result<Option<employee::Model>, ServiceError> {
        Ok(employee::replace(&self.db, id, input).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = employee::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    struct Table {
        rows: BTreeMap<i32, employee::Model>,
        next_id: i32,
    }

    /// Identifiers start at 1 and are never reused.
    pub struct MockEmployeeRepository {
        table: Mutex<Table>,
    }

    impl Default for MockEmployeeRepository {
        fn default() -> Self {
            Self { table: Mutex::new(Table { rows: BTreeMap::new(), next_id: 1 }) }
        }
    }

    impl MockEmployeeRepository {
        pub async fn len(&self) -> usize {
            self.table.lock().await.rows.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }
    }

    fn row(id: i32, input: EmployeeInput) -> employee::Model {
        employee::Model {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            date_of_birth: input.date_of_birth,
            position: input.position,
            salary: input.salary,
        }
    }

    #[async_trait]
    impl EmployeeRepository for MockEmployeeRepository {
        async fn list(&self) -> Result<Vec<employee::Model>, ServiceError> {
            Ok(self.table.lock().await.rows.values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<employee::Model>, ServiceError> {
            Ok(self.table.lock().await.rows.get(&id).cloned())
        }

        async fn insert(&self, input: EmployeeInput) -> Result<employee::Model, ServiceError> {
            let mut table = self.table.lock().await;
            let id = table.next_id;
            table.next_id += 1;
            let m = row(id, input);
            table.rows.insert(id, m.clone());
            Ok(m)
        }

        async fn update(&self, id: i32, input: EmployeeInput) -> Result<Option<employee::Model>, ServiceError> {
            let mut table = self.table.lock().await;
            match table.rows.get_mut(&id) {
                Some(existing) => {
                    *existing = row(id, input);
                    Ok(Some(existing.clone()))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.table.lock().await.rows.remove(&id).is_some())
        }
    }
}
