use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactForms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactForms::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ContactForms::Name).string_len(100).not_null())
                    .col(ColumnDef::new(ContactForms::Email).text().not_null())
                    .col(ColumnDef::new(ContactForms::Phone).text())
                    .col(ColumnDef::new(ContactForms::Role).string_len(100).not_null())
                    .col(
                        ColumnDef::new(ContactForms::Company)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactForms::Message)
                            .string_len(2000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ContactForms::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ContactForms::IsArchived)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ContactForms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ContactForms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Inbox listing: filters on the workflow flags, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_forms_inbox")
                    .table(ContactForms::Table)
                    .col(ContactForms::IsArchived)
                    .col(ContactForms::IsRead)
                    .col(ContactForms::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactForms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactForms {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Role,
    Company,
    Message,
    IsRead,
    IsArchived,
    CreatedAt,
    UpdatedAt,
}
