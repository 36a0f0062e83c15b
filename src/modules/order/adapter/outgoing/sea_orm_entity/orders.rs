use sea_orm::entity::prelude::*;

use crate::modules::order::application::domain::entities::{
    DeliveryStatus, OrderHeader, PaymentStatus, ShippingSnapshot,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub tx_ref: String,
    pub delivery_status: DeliveryStatusDb,
    pub payment_status: PaymentStatusDb,
    pub date_delivered: Option<DateTimeWithTimeZone>,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub zipcode: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "delivery_status")]
pub enum DeliveryStatusDb {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "PACKING")]
    Packing,
    #[sea_orm(string_value = "SHIPPING")]
    Shipping,
    #[sea_orm(string_value = "ARRIVING")]
    Arriving,
    #[sea_orm(string_value = "SUCCESS")]
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_status")]
pub enum PaymentStatusDb {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "PROCESSING")]
    Processing,
    #[sea_orm(string_value = "SUCCESSFUL")]
    Successful,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
    #[sea_orm(string_value = "FAILED")]
    Failed,
}

impl From<DeliveryStatusDb> for DeliveryStatus {
    fn from(value: DeliveryStatusDb) -> Self {
        match value {
            DeliveryStatusDb::Pending => DeliveryStatus::Pending,
            DeliveryStatusDb::Packing => DeliveryStatus::Packing,
            DeliveryStatusDb::Shipping => DeliveryStatus::Shipping,
            DeliveryStatusDb::Arriving => DeliveryStatus::Arriving,
            DeliveryStatusDb::Success => DeliveryStatus::Success,
        }
    }
}

impl From<PaymentStatusDb> for PaymentStatus {
    fn from(value: PaymentStatusDb) -> Self {
        match value {
            PaymentStatusDb::Pending => PaymentStatus::Pending,
            PaymentStatusDb::Processing => PaymentStatus::Processing,
            PaymentStatusDb::Successful => PaymentStatus::Successful,
            PaymentStatusDb::Cancelled => PaymentStatus::Cancelled,
            PaymentStatusDb::Failed => PaymentStatus::Failed,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(
        has_many = "crate::modules::cart::adapter::outgoing::sea_orm_entity::order_items::Entity"
    )]
    OrderItems,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<crate::modules::cart::adapter::outgoing::sea_orm_entity::order_items::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = sea_orm::Set(chrono::Utc::now().into());
        }
        Ok(self)
    }
}

impl Model {
    pub fn to_header(self) -> OrderHeader {
        OrderHeader {
            id: self.id,
            tx_ref: self.tx_ref,
            delivery_status: self.delivery_status.into(),
            payment_status: self.payment_status.into(),
            date_delivered: self.date_delivered.map(|d| d.with_timezone(&chrono::Utc)),
            shipping: ShippingSnapshot {
                full_name: self.full_name,
                email: self.email,
                phone: self.phone,
                address: self.address,
                city: self.city,
                country: self.country,
                zipcode: self.zipcode,
            },
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_model(user_id: Uuid, tx_ref: &str) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        user_id,
        tx_ref: tx_ref.to_string(),
        delivery_status: DeliveryStatusDb::Pending,
        payment_status: PaymentStatusDb::Pending,
        date_delivered: None,
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        address: Some("12 Analytical St".to_string()),
        city: Some("London".to_string()),
        country: Some("UK".to_string()),
        zipcode: Some(10115),
        created_at: now,
        updated_at: now,
    }
}
