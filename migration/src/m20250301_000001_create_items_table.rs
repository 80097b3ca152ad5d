use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Items::Title)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Items::Description)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Items::Content)
                            .text()
                            .not_null(),
                    )
                    // Lowercased copies written by the application; search
                    // compares against these, never against the display text
                    .col(
                        ColumnDef::new(Items::TitleSearch)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Items::DescriptionSearch)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Items::ContentSearch)
                            .text()
                            .not_null(),
                    )
                    // Unix timestamp in microseconds
                    .col(
                        ColumnDef::new(Items::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing and search both order by recency
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_items_created_at")
                    .table(Items::Table)
                    .col(Items::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_items_created_at")
                    .table(Items::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Title,
    Description,
    Content,
    TitleSearch,
    DescriptionSearch,
    ContentSearch,
    CreatedAt,
}
