use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Heroes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Heroes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Heroes::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Heroes::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Heroes::Bio).string_len(1000).not_null())
                    .col(
                        ColumnDef::new(Heroes::YearsExperience)
                            .integer()
                            .not_null()
                            .check(Expr::col(Heroes::YearsExperience).between(0, 50)),
                    )
                    .col(ColumnDef::new(Heroes::CvUrl).text())
                    .col(ColumnDef::new(Heroes::ProfileImage).text())
                    .col(
                        ColumnDef::new(Heroes::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Heroes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Heroes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Public read picks the most recently updated active hero
        manager
            .create_index(
                Index::create()
                    .name("idx_heroes_active_updated")
                    .table(Heroes::Table)
                    .col(Heroes::IsActive)
                    .col(Heroes::UpdatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Heroes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Heroes {
    Table,
    Id,
    Name,
    Title,
    Bio,
    YearsExperience,
    CvUrl,
    ProfileImage,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
