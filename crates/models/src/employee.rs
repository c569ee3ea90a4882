use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Employee row. Serialized in camelCase to match the public JSON shape.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Date,
    pub position: String,
    pub salary: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Request payload for create and update: every column except `id`.
/// An `id` sent by the client is ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Date,
    pub position: String,
    pub salary: f64,
}

impl EmployeeInput {
    /// New row with `id` left for the store to assign.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            email: Set(self.email),
            date_of_birth: Set(self.date_of_birth),
            position: Set(self.position),
            salary: Set(self.salary),
        }
    }

    /// Overwrite every mutable column. Nothing is merged or skipped.
    pub fn apply_to(self, am: &mut ActiveModel) {
        am.first_name = Set(self.first_name);
        am.last_name = Set(self.last_name);
        am.email = Set(self.email);
        am.date_of_birth = Set(self.date_of_birth);
        am.position = Set(self.position);
        am.salary = Set(self.salary);
    }
}

impl From<Model> for EmployeeInput {
    fn from(m: Model) -> Self {
        Self {
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            date_of_birth: m.date_of_birth,
            position: m.position,
            salary: m.salary,
        }
    }
}

pub async fn create(db: &DatabaseConnection, input: EmployeeInput) -> Result<Model, errors::ModelError> {
    input
        .into_active_model()
        .insert(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Returns `None` when no row has `id`.
pub async fn replace(db: &DatabaseConnection, id: i32, input: EmployeeInput) -> Result<Option<Model>, errors::ModelError> {
    let Some(existing) = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
    else {
        return Ok(None);
    };
    let mut am: ActiveModel = existing.into();
    input.apply_to(&mut am);
    let updated = am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}
