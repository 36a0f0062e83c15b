use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::order_items::{self, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::cart::application::domain::entities::{CartLine, CartProduct};
use crate::modules::cart::application::ports::outgoing::{CartQuery, CartQueryError};
use crate::modules::catalog::adapter::outgoing::product_query_postgres::load_seller_shops;
use crate::modules::catalog::adapter::outgoing::sea_orm_entity::products;

#[derive(Clone, Debug)]
pub struct CartQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CartQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Joins lines to their products (deleted ones included, the line still
    /// exists) and the products' sellers.
    async fn hydrate(&self, items: Vec<order_items::Model>) -> Result<Vec<CartLine>, CartQueryError> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: HashSet<Uuid> = items.iter().map(|i| i.product_id).collect();
        let products: HashMap<Uuid, products::Model> = products::Entity::find()
            .filter(products::Column::Id.is_in(product_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let seller_ids = products.values().filter_map(|p| p.seller_id).collect();
        let shops = load_seller_shops(&self.db, seller_ids)
            .await
            .map_err(|e| CartQueryError::DatabaseError(e.to_string()))?;

        Ok(items
            .into_iter()
            .filter_map(|item| {
                let product = products.get(&item.product_id)?;
                Some(CartLine::new(
                    item.id,
                    item.product_id,
                    CartProduct {
                        seller: product.seller_id.and_then(|id| shops.get(&id).cloned()),
                        name: product.name.clone(),
                        slug: product.slug.clone(),
                        price: product.price_current,
                    },
                    item.quantity,
                ))
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> CartQueryError {
    CartQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CartQuery for CartQueryPostgres {
    async fn list_lines(&self, user_id: UserId) -> Result<Vec<CartLine>, CartQueryError> {
        let items = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::OrderId.is_null())
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.hydrate(items).await
    }

    async fn find_line(&self, line_id: Uuid) -> Result<Option<CartLine>, CartQueryError> {
        let item = Entity::find_by_id(line_id)
            .filter(Column::OrderId.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match item {
            Some(item) => Ok(self.hydrate(vec![item]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cart::adapter::outgoing::sea_orm_entity::order_items::sample_model;
    use crate::modules::catalog::adapter::outgoing::sea_orm_entity::products::sample_model as product_model;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn lines_carry_price_and_total() {
        // Arrange
        let user_id = Uuid::new_v4();
        let lamp = product_model(None, "desk-lamp", dec!(19.99));
        let mug = product_model(None, "mug", dec!(4.50));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                sample_model(user_id, lamp.id, 2),
                sample_model(user_id, mug.id, 3),
            ]])
            .append_query_results(vec![vec![lamp, mug]])
            .into_connection();

        // Act
        let lines = CartQueryPostgres::new(Arc::new(db))
            .list_lines(UserId::from(user_id))
            .await
            .unwrap();

        // Assert
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product.slug, "desk-lamp");
        assert_eq!(lines[0].total, dec!(39.98));
        assert_eq!(lines[1].total, dec!(13.50));
    }

    #[tokio::test]
    async fn empty_cart_skips_product_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<order_items::Model>::new()])
            .into_connection();

        let lines = CartQueryPostgres::new(Arc::new(db))
            .list_lines(UserId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn checked_out_line_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<order_items::Model>::new()])
            .into_connection();

        let line = CartQueryPostgres::new(Arc::new(db))
            .find_line(Uuid::new_v4())
            .await
            .unwrap();

        assert!(line.is_none());
    }
}
