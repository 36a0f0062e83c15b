use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::domain::entities::{Rating, Review};
use crate::shared::soft_delete::DeletionStatus;

/// Partial unique index over `(user_id, product_id) WHERE is_deleted = false`.
pub const ACTIVE_REVIEW_INDEX: &str = "idx_reviews_active_user_product";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeWithTimeZone>,
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

    #[sea_orm(
        belongs_to = "crate::modules::catalog::adapter::outgoing::sea_orm_entity::products::Entity",
        from = "Column::ProductId",
        to = "crate::modules::catalog::adapter::outgoing::sea_orm_entity::products::Column::Id",
        on_delete = "Cascade"
    )]
    Products,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<crate::modules::catalog::adapter::outgoing::sea_orm_entity::products::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Fails only on a rating the CHECK constraint should have kept out.
    pub fn to_domain(self) -> Result<Review, DbErr> {
        let rating = Rating::new(self.rating).map_err(|e| {
            DbErr::Type(format!("review {} has rating {}: {e}", self.id, self.rating))
        })?;

        Ok(Review {
            id: self.id,
            user_id: UserId::from(self.user_id),
            product_id: self.product_id,
            rating,
            text: self.text,
            deletion: DeletionStatus::from_columns(self.is_deleted, self.deleted_at),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_model(user_id: Uuid, product_id: Uuid, rating: i32) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        user_id,
        product_id,
        rating,
        text: "Does what it says".to_string(),
        is_deleted: false,
        deleted_at: None,
        created_at: now,
        updated_at: now,
    }
}
