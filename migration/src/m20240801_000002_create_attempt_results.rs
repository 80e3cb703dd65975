use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create attempt_results table
        manager
            .create_table(
                Table::create()
                    .table(AttemptResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttemptResults::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AttemptResults::Url).string().not_null())
                    .col(
                        ColumnDef::new(AttemptResults::Success)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AttemptResults::Duration)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(AttemptResults::DataSize)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AttemptResults::StatusCode)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(AttemptResults::Error).text())
                    .col(ColumnDef::new(AttemptResults::Result).json().not_null())
                    .col(
                        ColumnDef::new(AttemptResults::Timestamp)
                            .double()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Result listings are served ordered by timestamp
        manager
            .create_index(
                Index::create()
                    .name("idx_attempt_results_timestamp")
                    .table(AttemptResults::Table)
                    .col(AttemptResults::Timestamp)
                    .to_owned(),
            )
            .await?;

        // Equality filter used by the success-rate aggregation
        manager
            .create_index(
                Index::create()
                    .name("idx_attempt_results_success")
                    .table(AttemptResults::Table)
                    .col(AttemptResults::Success)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AttemptResults::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AttemptResults {
    Table,
    Id,
    Url,
    Success,
    Duration,
    DataSize,
    StatusCode,
    Error,
    Result,
    Timestamp,
}
