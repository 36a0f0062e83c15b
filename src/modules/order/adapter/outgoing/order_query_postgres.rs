use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::orders::{self, Column, Entity};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::modules::cart::adapter::outgoing::sea_orm_entity::order_items;
use crate::modules::catalog::adapter::outgoing::sea_orm_entity::{categories, products};
use crate::modules::catalog::application::domain::entities::Category;
use crate::modules::order::application::domain::entities::{
    Buyer, OrderDetail, OrderLine, OrderLineProduct, OrderView,
};
use crate::modules::order::application::ports::outgoing::{OrderQuery, OrderQueryError};

#[derive(Clone, Debug)]
pub struct OrderQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Order lines grouped by order id, each group oldest first.
    async fn lines_by_order(
        &self,
        items: Vec<order_items::Model>,
    ) -> Result<HashMap<Uuid, Vec<OrderLine>>, OrderQueryError> {
        if items.is_empty() {
            return Ok(HashMap::new());
        }

        // Deleted products still show on the orders that bought them.
        let product_ids: HashSet<Uuid> = items.iter().map(|i| i.product_id).collect();
        let products: HashMap<Uuid, products::Model> = products::Entity::find()
            .filter(products::Column::Id.is_in(product_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let category_ids: HashSet<Uuid> =
            products.values().filter_map(|p| p.category_id).collect();
        let categories: HashMap<Uuid, Category> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            categories::Entity::find()
                .filter(categories::Column::Id.is_in(category_ids))
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .map(|c| (c.id, c.to_domain()))
                .collect()
        };

        let mut grouped: HashMap<Uuid, Vec<OrderLine>> = HashMap::new();
        for item in items {
            let (Some(order_id), Some(product)) = (item.order_id, products.get(&item.product_id))
            else {
                continue;
            };
            let line = OrderLine::new(
                item.id,
                OrderLineProduct {
                    name: product.name.clone(),
                    slug: product.slug.clone(),
                    desc: product.desc.clone(),
                    price_old: product.price_old,
                    price_current: product.price_current,
                    category: product.category_id.and_then(|id| categories.get(&id).cloned()),
                    image1: product.image1.clone(),
                    image2: product.image2.clone(),
                    image3: product.image3.clone(),
                },
                item.quantity,
            );
            grouped.entry(order_id).or_default().push(line);
        }

        Ok(grouped)
    }

    async fn buyers(&self, user_ids: HashSet<Uuid>) -> Result<HashMap<Uuid, Buyer>, OrderQueryError> {
        let rows = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .select_only()
            .column(users::Column::Id)
            .column(users::Column::FirstName)
            .column(users::Column::LastName)
            .column(users::Column::Email)
            .into_tuple::<(Uuid, String, String, String)>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|(id, first_name, last_name, email)| {
                (
                    id,
                    Buyer {
                        first_name,
                        last_name,
                        email,
                    },
                )
            })
            .collect())
    }

    /// Attaches lines and buyer details to `orders`, keeping their order.
    async fn assemble(&self, orders: Vec<orders::Model>) -> Result<Vec<OrderDetail>, OrderQueryError> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let items = order_items::Entity::find()
            .filter(order_items::Column::OrderId.is_in(orders.iter().map(|o| o.id)))
            .order_by_asc(order_items::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut lines = self.lines_by_order(items).await?;
        let buyers = self.buyers(orders.iter().map(|o| o.user_id).collect()).await?;

        Ok(orders
            .into_iter()
            .map(|order| {
                let buyer = buyers.get(&order.user_id).cloned().unwrap_or_default();
                let items = lines.remove(&order.id).unwrap_or_default();
                OrderDetail::assemble(order.to_header(), buyer, items)
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> OrderQueryError {
    OrderQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl OrderQuery for OrderQueryPostgres {
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<OrderDetail>, OrderQueryError> {
        let orders = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.assemble(orders).await
    }

    async fn find_for_user(
        &self,
        user_id: UserId,
        tx_ref: &str,
    ) -> Result<Option<OrderDetail>, OrderQueryError> {
        let order = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::TxRef.eq(tx_ref))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match order {
            Some(order) => Ok(self.assemble(vec![order]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list_for_seller(&self, seller_id: Uuid) -> Result<Vec<OrderView>, OrderQueryError> {
        let order_ids: Vec<Option<Uuid>> = order_items::Entity::find()
            .join(JoinType::InnerJoin, order_items::Relation::Products.def())
            .filter(products::Column::SellerId.eq(seller_id))
            .filter(order_items::Column::OrderId.is_not_null())
            .select_only()
            .column(order_items::Column::OrderId)
            .distinct()
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let order_ids: HashSet<Uuid> = order_ids.into_iter().flatten().collect();
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let orders = Entity::find()
            .filter(Column::Id.is_in(order_ids))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(self
            .assemble(orders)
            .await?
            .into_iter()
            .map(|detail| detail.order)
            .collect())
    }

    async fn seller_items(
        &self,
        seller_id: Uuid,
        tx_ref: &str,
    ) -> Result<Option<Vec<OrderLine>>, OrderQueryError> {
        let Some(order) = Entity::find()
            .filter(Column::TxRef.eq(tx_ref))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let items = order_items::Entity::find()
            .join(JoinType::InnerJoin, order_items::Relation::Products.def())
            .filter(order_items::Column::OrderId.eq(order.id))
            .filter(products::Column::SellerId.eq(seller_id))
            .order_by_asc(order_items::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if items.is_empty() {
            return Ok(None);
        }

        Ok(self.lines_by_order(items).await?.remove(&order.id))
    }
}
