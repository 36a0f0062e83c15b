use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create sellers table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Sellers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sellers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sellers::UserId).uuid().not_null().unique_key())
                    .col(
                        ColumnDef::new(Sellers::BusinessName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sellers::Slug)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Sellers::InnIdentificationNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sellers::WebsiteUrl).text())
                    .col(ColumnDef::new(Sellers::PhoneNumber).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Sellers::BusinessDescription)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sellers::BusinessAddress)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sellers::City).string_len(100).not_null())
                    .col(ColumnDef::new(Sellers::PostalCode).string_len(20).not_null())
                    .col(ColumnDef::new(Sellers::BankName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Sellers::BankBicNumber)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sellers::BankAccountNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sellers::BankRoutingNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sellers::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Sellers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Sellers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sellers_user_id")
                            .from(Sellers::Table, Sellers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_sellers_updated_at
                BEFORE UPDATE ON sellers
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_sellers_updated_at ON sellers;")
            .await?;

        manager
            .drop_table(Table::drop().table(Sellers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Sellers {
    Table,
    Id,
    UserId,
    BusinessName,
    Slug,
    InnIdentificationNumber,
    WebsiteUrl,
    PhoneNumber,
    BusinessDescription,
    BusinessAddress,
    City,
    PostalCode,
    BankName,
    BankBicNumber,
    BankAccountNumber,
    BankRoutingNumber,
    IsApproved,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
