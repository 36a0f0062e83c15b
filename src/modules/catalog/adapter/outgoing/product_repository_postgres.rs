use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::products::{ActiveModel, Column, Entity};
use crate::modules::catalog::application::domain::entities::Product;
use crate::modules::catalog::application::ports::outgoing::{
    CreateProductData, ProductRepository, ProductRepositoryError, UpdateProductData,
};
use crate::shared::db_error::is_unique_violation;
use crate::shared::patch::PatchField;
use crate::shared::soft_delete::DeletionStatus;

#[derive(Clone, Debug)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ProductRepositoryError {
        if is_unique_violation(&e) {
            return ProductRepositoryError::SlugAlreadyExists;
        }
        ProductRepositoryError::DatabaseError(e.to_string())
    }

    fn changes(data: UpdateProductData) -> ActiveModel {
        let mut active = ActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let Some(pricing) = data.pricing {
            active.price_current = Set(pricing.price_current);
            active.price_old = Set(pricing.price_old);
        }
        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(desc) = data.desc {
            active.desc = Set(desc);
        }
        if let Some(category_id) = data.category_id {
            active.category_id = Set(Some(category_id));
        }
        if let Some(in_stock) = data.in_stock {
            active.in_stock = Set(in_stock);
        }
        if let Some(image1) = data.image1 {
            active.image1 = Set(image1);
        }
        match data.image2 {
            PatchField::Unset => {}
            PatchField::Null => active.image2 = Set(None),
            PatchField::Value(v) => active.image2 = Set(Some(v)),
        }
        match data.image3 {
            PatchField::Unset => {}
            PatchField::Null => active.image3 = Set(None),
            PatchField::Value(v) => active.image3 = Set(Some(v)),
        }

        active
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            seller_id: Set(Some(data.seller_id)),
            category_id: Set(Some(data.category_id)),
            name: Set(data.name),
            slug: Set(data.slug),
            desc: Set(data.desc),
            price_old: Set(None),
            price_current: Set(data.price_current),
            in_stock: Set(data.in_stock),
            image1: Set(data.image1),
            image2: Set(data.image2),
            image3: Set(data.image3),
            is_deleted: Set(false),
            deleted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        Ok(model.to_domain())
    }

    async fn update_product(
        &self,
        product_id: Uuid,
        data: UpdateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let expected_price = data.expected_price;

        // Only lands while the row still holds the price the caller read.
        let mut rows = Entity::update_many()
            .set(Self::changes(data))
            .filter(Column::Id.eq(product_id))
            .filter(Column::IsDeleted.eq(false))
            .filter(Column::PriceCurrent.eq(expected_price))
            .exec_with_returning(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if let Some(model) = rows.pop() {
            return Ok(model.to_domain());
        }

        let still_there = Entity::find()
            .filter(Column::Id.eq(product_id))
            .filter(Column::IsDeleted.eq(false))
            .count(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if still_there > 0 {
            Err(ProductRepositoryError::StaleWrite)
        } else {
            Err(ProductRepositoryError::NotFound)
        }
    }

    async fn soft_delete_product(
        &self,
        product_id: Uuid,
        deletion: DeletionStatus,
    ) -> Result<(), ProductRepositoryError> {
        let (is_deleted, deleted_at) = deletion.to_columns();

        let result = Entity::update_many()
            .set(ActiveModel {
                is_deleted: Set(is_deleted),
                deleted_at: Set(deleted_at),
                updated_at: Set(Utc::now().fixed_offset()),
                ..Default::default()
            })
            .filter(Column::Id.eq(product_id))
            .filter(Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProductRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::adapter::outgoing::sea_orm_entity::products::{
        sample_model, Model,
    };
    use crate::modules::catalog::application::domain::entities::Pricing;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    fn price_update(expected: rust_decimal::Decimal) -> UpdateProductData {
        UpdateProductData {
            expected_price: expected,
            pricing: Some(Pricing {
                price_current: dec!(8.00),
                price_old: Some(expected),
            }),
            name: None,
            desc: None,
            category_id: None,
            in_stock: None,
            image1: None,
            image2: PatchField::Unset,
            image3: PatchField::Unset,
        }
    }

    fn count_row(n: i64) -> Vec<std::collections::BTreeMap<&'static str, Value>> {
        vec![maplit::btreemap! { "num_items" => Value::BigInt(Some(n)) }]
    }

    #[tokio::test]
    async fn guarded_update_returns_new_row() {
        let mut updated = sample_model(None, "desk-lamp", dec!(8.00));
        updated.price_old = Some(dec!(10.00));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![updated.clone()]])
            .into_connection();

        let product = ProductRepositoryPostgres::new(Arc::new(db))
            .update_product(updated.id, price_update(dec!(10.00)))
            .await
            .unwrap();

        assert_eq!(product.price_current, dec!(8.00));
        assert_eq!(product.price_old, Some(dec!(10.00)));
    }

    #[tokio::test]
    async fn price_moved_underneath_is_stale() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .append_query_results(vec![count_row(1)])
            .into_connection();

        let result = ProductRepositoryPostgres::new(Arc::new(db))
            .update_product(Uuid::new_v4(), price_update(dec!(10.00)))
            .await;

        assert!(matches!(result, Err(ProductRepositoryError::StaleWrite)));
    }

    #[tokio::test]
    async fn vanished_product_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .append_query_results(vec![count_row(0)])
            .into_connection();

        let result = ProductRepositoryPostgres::new(Arc::new(db))
            .update_product(Uuid::new_v4(), price_update(dec!(10.00)))
            .await;

        assert!(matches!(result, Err(ProductRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn soft_delete_of_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let result = ProductRepositoryPostgres::new(Arc::new(db))
            .soft_delete_product(
                Uuid::new_v4(),
                DeletionStatus::Deleted { at: Utc::now() },
            )
            .await;

        assert!(matches!(result, Err(ProductRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn slug_collision_on_insert_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"products_slug_key\"".to_string(),
            )])
            .into_connection();

        let result = ProductRepositoryPostgres::new(Arc::new(db))
            .create_product(CreateProductData {
                seller_id: Uuid::new_v4(),
                category_id: Uuid::new_v4(),
                name: "Desk Lamp".to_string(),
                slug: "desk-lamp".to_string(),
                desc: String::new(),
                price_current: dec!(1),
                in_stock: 5,
                image1: "a.png".to_string(),
                image2: None,
                image3: None,
            })
            .await;

        assert!(matches!(result, Err(ProductRepositoryError::SlugAlreadyExists)));
    }
}
