use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use crate::auth::application::domain::entities::UserId;
use crate::modules::seller::application::domain::entities::Seller;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sellers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub business_name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub inn_identification_number: String,
    pub website_url: Option<String>,
    pub phone_number: String,
    #[sea_orm(column_type = "Text")]
    pub business_description: String,
    pub business_address: String,
    pub city: String,
    pub postal_code: String,
    pub bank_name: String,
    pub bank_bic_number: String,
    pub bank_account_number: String,
    pub bank_routing_number: String,
    pub is_approved: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.business_name {
            self.business_name = Set(name.trim().to_string());
        }

        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_domain(self) -> Seller {
        Seller {
            id: self.id,
            user_id: UserId::from(self.user_id),
            business_name: self.business_name,
            slug: self.slug,
            inn_identification_number: self.inn_identification_number,
            website_url: self.website_url,
            phone_number: self.phone_number,
            business_description: self.business_description,
            business_address: self.business_address,
            city: self.city,
            postal_code: self.postal_code,
            bank_name: self.bank_name,
            bank_bic_number: self.bank_bic_number,
            bank_account_number: self.bank_account_number,
            bank_routing_number: self.bank_routing_number,
            is_approved: self.is_approved,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_model(user_id: Uuid, slug: &str, approved: bool) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        user_id,
        business_name: "Acme Goods".to_string(),
        slug: slug.to_string(),
        inn_identification_number: "7707083893".to_string(),
        website_url: None,
        phone_number: "+15550100".to_string(),
        business_description: "Handmade goods".to_string(),
        business_address: "1 Market St".to_string(),
        city: "Springfield".to_string(),
        postal_code: "12345".to_string(),
        bank_name: "First Bank".to_string(),
        bank_bic_number: "044525225".to_string(),
        bank_account_number: "40702810900000000001".to_string(),
        bank_routing_number: "021000021".to_string(),
        is_approved: approved,
        created_at: now,
        updated_at: now,
    }
}
