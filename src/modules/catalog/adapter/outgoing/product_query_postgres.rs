use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::categories;
use super::sea_orm_entity::products::{self, Column, Entity};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::catalog::application::domain::entities::{Category, Product};
use crate::modules::catalog::application::ports::outgoing::{
    ProductFilter, ProductQuery, ProductQueryError, ProductView, SellerShopView,
};
use crate::modules::seller::adapter::outgoing::sea_orm_entity::sellers;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone, Debug)]
pub struct ProductQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn active() -> Select<Entity> {
        Entity::find().filter(Column::IsDeleted.eq(false))
    }

    /// Loads categories, sellers and seller avatars for `models` in one
    /// query each, then assembles the views in the order given.
    async fn hydrate(
        &self,
        models: Vec<products::Model>,
    ) -> Result<Vec<ProductView>, ProductQueryError> {
        let category_ids: HashSet<Uuid> = models.iter().filter_map(|m| m.category_id).collect();
        let seller_ids: HashSet<Uuid> = models.iter().filter_map(|m| m.seller_id).collect();

        let categories: HashMap<Uuid, Category> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            categories::Entity::find()
                .filter(categories::Column::Id.is_in(category_ids))
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .map(|m| (m.id, m.to_domain()))
                .collect()
        };

        let shops = load_seller_shops(&self.db, seller_ids).await?;

        Ok(models
            .into_iter()
            .map(|m| ProductView {
                seller: m.seller_id.and_then(|id| shops.get(&id).cloned()),
                category: m.category_id.and_then(|id| categories.get(&id).cloned()),
                name: m.name,
                slug: m.slug,
                desc: m.desc,
                price_old: m.price_old,
                price_current: m.price_current,
                in_stock: m.in_stock,
                image1: m.image1,
                image2: m.image2,
                image3: m.image3,
                created_at: m.created_at.with_timezone(&chrono::Utc),
            })
            .collect())
    }

    async fn hydrate_one(
        &self,
        model: Option<products::Model>,
    ) -> Result<Option<ProductView>, ProductQueryError> {
        match model {
            Some(model) => Ok(self.hydrate(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }
}

fn map_db_err(e: DbErr) -> ProductQueryError {
    ProductQueryError::DatabaseError(e.to_string())
}

/// Shop summaries keyed by seller id. The avatar lives on the seller's user.
pub(crate) async fn load_seller_shops(
    db: &DatabaseConnection,
    seller_ids: HashSet<Uuid>,
) -> Result<HashMap<Uuid, SellerShopView>, ProductQueryError> {
    if seller_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let sellers = sellers::Entity::find()
        .filter(sellers::Column::Id.is_in(seller_ids))
        .all(db)
        .await
        .map_err(map_db_err)?;

    if sellers.is_empty() {
        return Ok(HashMap::new());
    }

    let avatars: HashMap<Uuid, Option<String>> = users::Entity::find()
        .filter(users::Column::Id.is_in(sellers.iter().map(|s| s.user_id)))
        .select_only()
        .column(users::Column::Id)
        .column(users::Column::Avatar)
        .into_tuple::<(Uuid, Option<String>)>()
        .all(db)
        .await
        .map_err(map_db_err)?
        .into_iter()
        .collect();

    Ok(sellers
        .into_iter()
        .map(|s| {
            let avatar = avatars.get(&s.user_id).cloned().flatten();
            (
                s.id,
                SellerShopView {
                    name: s.business_name,
                    slug: s.slug,
                    avatar,
                },
            )
        })
        .collect())
}

fn filter_condition(filter: &ProductFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(min) = filter.min_price {
        condition = condition.add(Column::PriceCurrent.gte(min));
    }
    if let Some(max) = filter.max_price {
        condition = condition.add(Column::PriceCurrent.lte(max));
    }
    if let Some(stock) = filter.in_stock {
        condition = condition.add(Column::InStock.gte(stock));
    }
    if let Some(after) = filter.created_after {
        condition = condition.add(Column::CreatedAt.gte(after.fixed_offset()));
    }

    condition
}

#[async_trait]
impl ProductQuery for ProductQueryPostgres {
    async fn list(&self, filter: ProductFilter) -> Result<Vec<ProductView>, ProductQueryError> {
        let models = Self::active()
            .filter(filter_condition(&filter))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.hydrate(models).await
    }

    async fn list_by_category(
        &self,
        category_id: Uuid,
    ) -> Result<Vec<ProductView>, ProductQueryError> {
        let models = Self::active()
            .filter(Column::CategoryId.eq(category_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.hydrate(models).await
    }

    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<ProductView>, ProductQueryError> {
        let models = Self::active()
            .filter(Column::SellerId.eq(seller_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.hydrate(models).await
    }

    async fn find_view_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ProductView>, ProductQueryError> {
        let model = Self::active()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.hydrate_one(model).await
    }

    async fn find_view_by_id(
        &self,
        product_id: Uuid,
    ) -> Result<Option<ProductView>, ProductQueryError> {
        let model = Self::active()
            .filter(Column::Id.eq(product_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.hydrate_one(model).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, ProductQueryError> {
        let model = Self::active()
            .filter(Column::Slug.eq(slug.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn slug_taken(&self, slug: &str) -> Result<bool, ProductQueryError> {
        let count = Entity::find()
            .filter(Column::Slug.eq(slug))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}
