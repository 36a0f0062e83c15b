use sea_orm::entity::prelude::*;

/// A cart line while `order_id` is null, an order line afterwards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub order_id: Option<Uuid>,
    pub product_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::catalog::adapter::outgoing::sea_orm_entity::products::Entity",
        from = "Column::ProductId",
        to = "crate::modules::catalog::adapter::outgoing::sea_orm_entity::products::Column::Id",
        on_delete = "Cascade"
    )]
    Products,

    #[sea_orm(
        belongs_to = "crate::modules::order::adapter::outgoing::sea_orm_entity::orders::Entity",
        from = "Column::OrderId",
        to = "crate::modules::order::adapter::outgoing::sea_orm_entity::orders::Column::Id",
        on_delete = "Cascade"
    )]
    Orders,
}

impl Related<crate::modules::catalog::adapter::outgoing::sea_orm_entity::products::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<crate::modules::order::adapter::outgoing::sea_orm_entity::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
pub(crate) fn sample_model(user_id: Uuid, product_id: Uuid, quantity: i32) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        user_id,
        order_id: None,
        product_id,
        quantity,
        created_at: now,
        updated_at: now,
    }
}
