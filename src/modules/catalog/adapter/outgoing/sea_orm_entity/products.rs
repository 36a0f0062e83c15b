use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use crate::modules::catalog::application::domain::entities::Product;
use crate::shared::soft_delete::DeletionStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub seller_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub desc: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub price_old: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price_current: Decimal,
    pub in_stock: i32,
    pub image1: String,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_delete = "SetNull"
    )]
    Categories,

    #[sea_orm(
        belongs_to = "crate::modules::seller::adapter::outgoing::sea_orm_entity::sellers::Entity",
        from = "Column::SellerId",
        to = "crate::modules::seller::adapter::outgoing::sea_orm_entity::sellers::Column::Id",
        on_delete = "SetNull"
    )]
    Sellers,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<crate::modules::seller::adapter::outgoing::sea_orm_entity::sellers::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Sellers.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_domain(self) -> Product {
        Product {
            id: self.id,
            seller_id: self.seller_id,
            category_id: self.category_id,
            name: self.name,
            slug: self.slug,
            desc: self.desc,
            price_old: self.price_old,
            price_current: self.price_current,
            in_stock: self.in_stock,
            image1: self.image1,
            image2: self.image2,
            image3: self.image3,
            deletion: DeletionStatus::from_columns(self.is_deleted, self.deleted_at),
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_model(seller_id: Option<Uuid>, slug: &str, price: Decimal) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        seller_id,
        category_id: None,
        name: "Desk Lamp".to_string(),
        slug: slug.to_string(),
        desc: "Warm light".to_string(),
        price_old: None,
        price_current: price,
        in_stock: 5,
        image1: "product_images/lamp.png".to_string(),
        image2: None,
        image3: None,
        is_deleted: false,
        deleted_at: None,
        created_at: now,
        updated_at: now,
    }
}
