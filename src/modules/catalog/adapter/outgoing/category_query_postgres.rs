use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use super::sea_orm_entity::categories::{Column, Entity};
use crate::modules::catalog::application::domain::entities::Category;
use crate::modules::catalog::application::ports::outgoing::{CategoryQuery, CategoryQueryError};

#[derive(Clone, Debug)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CategoryQueryError {
    CategoryQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn list(&self) -> Result<Vec<Category>, CategoryQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, CategoryQueryError> {
        let category = Entity::find()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(category.map(|m| m.to_domain()))
    }

    async fn slug_taken(&self, slug: &str) -> Result<bool, CategoryQueryError> {
        let count = Entity::find()
            .filter(Column::Slug.eq(slug))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}
