//! Create `employees` table.
//!
//! One row per employee; `id` is assigned by the store.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk_auto(Employees::Id))
                    .col(string(Employees::FirstName))
                    .col(string(Employees::LastName))
                    .col(string(Employees::Email))
                    .col(date(Employees::DateOfBirth))
                    .col(string(Employees::Position))
                    .col(double(Employees::Salary))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employees::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employees { Table, Id, FirstName, LastName, Email, DateOfBirth, Position, Salary }
