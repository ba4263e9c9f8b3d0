use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create experiences table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Experiences::Title).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Experiences::Company)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::Website).text().not_null())
                    .col(ColumnDef::new(Experiences::Duration).text().not_null())
                    .col(ColumnDef::new(Experiences::Location).text().not_null())
                    .col(
                        ColumnDef::new(Experiences::Description)
                            .string_len(2000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Order)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Experiences::Order).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Experiences::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Experiences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .create_index(
                Index::create()
                    .name("idx_experiences_active_order")
                    .table(Experiences::Table)
                    .col(Experiences::IsActive)
                    .col(Experiences::Order)
                    .to_owned(),
            )
            .await?;

        // Full-text search over company/title/description
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_experiences_search
                ON experiences
                USING GIN (to_tsvector('simple', company || ' ' || title || ' ' || description));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_experiences_search;
                DROP INDEX IF EXISTS idx_experiences_active_order;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    Website,
    Duration,
    Location,
    Description,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
