use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Educations::Degree).text().not_null())
                    .col(ColumnDef::new(Educations::Institution).text().not_null())
                    .col(ColumnDef::new(Educations::Duration).text().not_null())
                    .col(ColumnDef::new(Educations::Location).text().not_null())
                    .col(ColumnDef::new(Educations::Description).string_len(1000))
                    .col(
                        ColumnDef::new(Educations::Order)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Educations::Order).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Educations::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Educations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Educations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_educations_active_order")
                    .table(Educations::Table)
                    .col(Educations::IsActive)
                    .col(Educations::Order)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Educations {
    Table,
    Id,
    Degree,
    Institution,
    Duration,
    Location,
    Description,
    Order,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
