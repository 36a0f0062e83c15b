use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::categories::ActiveModel;
use crate::modules::catalog::application::domain::entities::Category;
use crate::modules::catalog::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CreateCategoryData,
};
use crate::shared::db_error::is_unique_violation;

#[derive(Clone, Debug)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CategoryRepositoryError {
    if is_unique_violation(&e) {
        return CategoryRepositoryError::AlreadyExists;
    }
    CategoryRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            slug: Set(data.slug),
            image: Set(data.image),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model.to_domain())
    }
}
