use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::sellers::{Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::seller::application::domain::entities::Seller;
use crate::modules::seller::application::ports::outgoing::{SellerQuery, SellerQueryError};

#[derive(Clone, Debug)]
pub struct SellerQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SellerQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> SellerQueryError {
    SellerQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SellerQuery for SellerQueryPostgres {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Seller>, SellerQueryError> {
        let seller = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(seller.map(|m| m.to_domain()))
    }

    async fn find_by_id(&self, seller_id: Uuid) -> Result<Option<Seller>, SellerQueryError> {
        let seller = Entity::find_by_id(seller_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(seller.map(|m| m.to_domain()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Seller>, SellerQueryError> {
        let seller = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(seller.map(|m| m.to_domain()))
    }

    async fn slug_taken(&self, slug: &str, except_user: UserId) -> Result<bool, SellerQueryError> {
        let count = Entity::find()
            .filter(Column::Slug.eq(slug))
            .filter(Column::UserId.ne(except_user.value()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}
