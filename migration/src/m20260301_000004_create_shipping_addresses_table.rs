use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShippingAddresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShippingAddresses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShippingAddresses::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(ShippingAddresses::FullName)
                            .string_len(1000)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShippingAddresses::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ShippingAddresses::Phone).string_len(20))
                    .col(ColumnDef::new(ShippingAddresses::Address).string_len(1000))
                    .col(ColumnDef::new(ShippingAddresses::City).string_len(200))
                    .col(ColumnDef::new(ShippingAddresses::Country).string_len(200))
                    .col(ColumnDef::new(ShippingAddresses::Zipcode).integer())
                    .col(
                        ColumnDef::new(ShippingAddresses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ShippingAddresses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipping_addresses_user_id")
                            .from(ShippingAddresses::Table, ShippingAddresses::UserId)
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
                CREATE INDEX IF NOT EXISTS idx_shipping_addresses_user_id
                ON shipping_addresses (user_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_shipping_addresses_updated_at
                BEFORE UPDATE ON shipping_addresses
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
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_shipping_addresses_updated_at ON shipping_addresses;
                DROP INDEX IF EXISTS idx_shipping_addresses_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShippingAddresses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ShippingAddresses {
    Table,
    Id,
    UserId,
    FullName,
    Email,
    Phone,
    Address,
    City,
    Country,
    Zipcode,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
