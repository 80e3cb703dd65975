use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create crawl_tasks table
        manager
            .create_table(
                Table::create()
                    .table(CrawlTasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrawlTasks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrawlTasks::Status).string().not_null())
                    .col(ColumnDef::new(CrawlTasks::Config).json().not_null())
                    .col(
                        ColumnDef::new(CrawlTasks::StartTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(CrawlTasks::EndTime).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(CrawlTasks::CompletedUrls)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CrawlTasks::TotalUrls)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(CrawlTasks::Success).boolean())
                    .col(ColumnDef::new(CrawlTasks::Error).text())
                    .to_owned(),
            )
            .await?;

        // Status listings are served ordered by start time
        manager
            .create_index(
                Index::create()
                    .name("idx_crawl_tasks_start_time")
                    .table(CrawlTasks::Table)
                    .col(CrawlTasks::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CrawlTasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CrawlTasks {
    Table,
    Id,
    Status,
    Config,
    StartTime,
    EndTime,
    CompletedUrls,
    TotalUrls,
    Success,
    Error,
}
