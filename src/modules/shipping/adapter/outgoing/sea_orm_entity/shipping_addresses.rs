use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::modules::shipping::application::domain::entities::ShippingAddress;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shipping_addresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(self) -> ShippingAddress {
        ShippingAddress {
            id: self.id,
            user_id: UserId::from(self.user_id),
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            city: self.city,
            country: self.country,
            zipcode: self.zipcode,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_model(user_id: Uuid, city: &str) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        user_id,
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        address: Some("12 Analytical St".to_string()),
        city: Some(city.to_string()),
        country: Some("UK".to_string()),
        zipcode: Some(10115),
        created_at: now,
        updated_at: now,
    }
}
