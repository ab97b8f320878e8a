use sea_orm_migration::{prelude::*, schema::*};

static IDX_CUSTOMER_FULL_NAME: &str = "idx-customer-full_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::CusId))
                    .col(string(Customer::FullName))
                    .col(string(Customer::Phone))
                    .col(string_null(Customer::Email))
                    .to_owned(),
            )
            .await?;

        // Ticket requesters are resolved by full name
        manager
            .create_index(
                Index::create()
                    .name(IDX_CUSTOMER_FULL_NAME)
                    .table(Customer::Table)
                    .col(Customer::FullName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CUSTOMER_FULL_NAME)
                    .table(Customer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    CusId,
    FullName,
    Phone,
    Email,
}
