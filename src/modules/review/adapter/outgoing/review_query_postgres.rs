use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::reviews::{Column, Entity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::modules::review::application::domain::entities::Review;
use crate::modules::review::application::ports::outgoing::{ReviewQuery, ReviewQueryError};

#[derive(Clone, Debug)]
pub struct ReviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ReviewQueryError {
    ReviewQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ReviewQuery for ReviewQueryPostgres {
    async fn list_for_product(&self, product_id: Uuid) -> Result<Vec<Review>, ReviewQueryError> {
        let models = Entity::find()
            .filter(Column::ProductId.eq(product_id))
            .filter(Column::IsDeleted.eq(false))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(Model::to_domain)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_db_err)
    }

    async fn find_by_id(&self, review_id: Uuid) -> Result<Option<Review>, ReviewQueryError> {
        let model = Entity::find_by_id(review_id)
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model.map(Model::to_domain).transpose().map_err(map_db_err)
    }

    async fn exists_for(
        &self,
        user_id: UserId,
        product_id: Uuid,
    ) -> Result<bool, ReviewQueryError> {
        let count = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::ProductId.eq(product_id))
            .filter(Column::IsDeleted.eq(false))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}
