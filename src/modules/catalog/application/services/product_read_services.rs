//! Shop-side product reads. None of these touch deleted products.

use async_trait::async_trait;

use crate::modules::catalog::application::ports::{
    incoming::use_cases::{
        GetProductError, GetProductUseCase, ListProductsError, ListProductsUseCase,
        ListSellerProductsError, ListSellerProductsUseCase, ProductsByCategoryError,
        ProductsByCategoryUseCase, ProductsBySellerError, ProductsBySellerUseCase,
    },
    outgoing::{CategoryQuery, ProductFilter, ProductQuery, ProductView},
};
use crate::modules::seller::application::{domain::entities::Seller, ports::outgoing::SellerQuery};

//
// ──────────────────────────────────────────────────────────
// All products
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ListProductsService<P>
where
    P: ProductQuery + Send + Sync,
{
    products: P,
}

impl<P> ListProductsService<P>
where
    P: ProductQuery + Send + Sync,
{
    pub fn new(products: P) -> Self {
        Self { products }
    }
}

#[async_trait]
impl<P> ListProductsUseCase for ListProductsService<P>
where
    P: ProductQuery + Send + Sync,
{
    async fn execute(&self, filter: ProductFilter) -> Result<Vec<ProductView>, ListProductsError> {
        if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
            if min > max {
                return Err(ListProductsError::InvalidPriceRange);
            }
        }

        self.products
            .list(filter)
            .await
            .map_err(|e| ListProductsError::QueryError(e.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// By category
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ProductsByCategoryService<C, P>
where
    C: CategoryQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    categories: C,
    products: P,
}

impl<C, P> ProductsByCategoryService<C, P>
where
    C: CategoryQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    pub fn new(categories: C, products: P) -> Self {
        Self {
            categories,
            products,
        }
    }
}

#[async_trait]
impl<C, P> ProductsByCategoryUseCase for ProductsByCategoryService<C, P>
where
    C: CategoryQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    async fn execute(
        &self,
        category_slug: &str,
    ) -> Result<Vec<ProductView>, ProductsByCategoryError> {
        let category = self
            .categories
            .find_by_slug(category_slug)
            .await
            .map_err(|e| ProductsByCategoryError::QueryError(e.to_string()))?
            .ok_or(ProductsByCategoryError::CategoryNotFound)?;

        self.products
            .list_by_category(category.id)
            .await
            .map_err(|e| ProductsByCategoryError::QueryError(e.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// By seller (public shop page)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ProductsBySellerService<S, P>
where
    S: SellerQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    sellers: S,
    products: P,
}

impl<S, P> ProductsBySellerService<S, P>
where
    S: SellerQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    pub fn new(sellers: S, products: P) -> Self {
        Self { sellers, products }
    }
}

#[async_trait]
impl<S, P> ProductsBySellerUseCase for ProductsBySellerService<S, P>
where
    S: SellerQuery + Send + Sync,
    P: ProductQuery + Send + Sync,
{
    async fn execute(&self, seller_slug: &str) -> Result<Vec<ProductView>, ProductsBySellerError> {
        let seller = self
            .sellers
            .find_by_slug(seller_slug)
            .await
            .map_err(|e| ProductsBySellerError::QueryError(e.to_string()))?
            .ok_or(ProductsBySellerError::SellerNotFound)?;

        self.products
            .list_by_seller(seller.id)
            .await
            .map_err(|e| ProductsBySellerError::QueryError(e.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Single product
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct GetProductService<P>
where
    P: ProductQuery + Send + Sync,
{
    products: P,
}

impl<P> GetProductService<P>
where
    P: ProductQuery + Send + Sync,
{
    pub fn new(products: P) -> Self {
        Self { products }
    }
}

#[async_trait]
impl<P> GetProductUseCase for GetProductService<P>
where
    P: ProductQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ProductView, GetProductError> {
        self.products
            .find_view_by_slug(slug)
            .await
            .map_err(|e| GetProductError::QueryError(e.to_string()))?
            .ok_or(GetProductError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Seller's own products
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ListSellerProductsService<P>
where
    P: ProductQuery + Send + Sync,
{
    products: P,
}

impl<P> ListSellerProductsService<P>
where
    P: ProductQuery + Send + Sync,
{
    pub fn new(products: P) -> Self {
        Self { products }
    }
}

#[async_trait]
impl<P> ListSellerProductsUseCase for ListSellerProductsService<P>
where
    P: ProductQuery + Send + Sync,
{
    async fn execute(&self, seller: &Seller) -> Result<Vec<ProductView>, ListSellerProductsError> {
        self.products
            .list_by_seller(seller.id)
            .await
            .map_err(|e| ListSellerProductsError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::catalog::application::domain::entities::fixtures::{category, product};
    use crate::modules::catalog::application::services::test_doubles::{
        FakeCategoryQuery, FakeProductQuery,
    };
    use crate::modules::seller::application::domain::entities::fixtures::seller;
    use crate::modules::seller::application::ports::outgoing::SellerQueryError;

    #[derive(Clone, Default)]
    struct FakeSellerQuery {
        sellers: Vec<Seller>,
    }

    #[async_trait]
    impl SellerQuery for FakeSellerQuery {
        async fn find_by_user(&self, _user_id: UserId) -> Result<Option<Seller>, SellerQueryError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _seller_id: Uuid) -> Result<Option<Seller>, SellerQueryError> {
            unimplemented!()
        }

        async fn find_by_slug(&self, slug: &str) -> Result<Option<Seller>, SellerQueryError> {
            Ok(self.sellers.iter().find(|s| s.slug == slug).cloned())
        }

        async fn slug_taken(&self, _slug: &str, _except: UserId) -> Result<bool, SellerQueryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn inverted_price_range_is_rejected() {
        let service = ListProductsService::new(FakeProductQuery::default());

        let result = service
            .execute(ProductFilter {
                min_price: Some(dec!(50)),
                max_price: Some(dec!(10)),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ListProductsError::InvalidPriceRange)));
    }

    #[tokio::test]
    async fn filter_is_passed_through() {
        let query = FakeProductQuery::default();
        let service = ListProductsService::new(query.clone());

        service
            .execute(ProductFilter {
                in_stock: Some(3),
                ..Default::default()
            })
            .await
            .unwrap();

        let seen = query.seen_filter.lock().unwrap().clone().unwrap();
        assert_eq!(seen.in_stock, Some(3));
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let service =
            ProductsByCategoryService::new(FakeCategoryQuery::default(), FakeProductQuery::default());

        let result = service.execute("nope").await;

        assert!(matches!(result, Err(ProductsByCategoryError::CategoryNotFound)));
    }

    #[tokio::test]
    async fn category_listing_only_returns_its_products() {
        let lighting = category("lighting");
        let mut lamp = product(None, dec!(10));
        lamp.category_id = Some(lighting.id);
        let other = product(None, dec!(20));

        let service = ProductsByCategoryService::new(
            FakeCategoryQuery {
                categories: vec![lighting],
            },
            FakeProductQuery::with(vec![lamp, other]),
        );

        let products = service.execute("lighting").await.unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn unknown_seller_slug_is_not_found() {
        let service =
            ProductsBySellerService::new(FakeSellerQuery::default(), FakeProductQuery::default());

        let result = service.execute("ghost-shop").await;

        assert!(matches!(result, Err(ProductsBySellerError::SellerNotFound)));
    }

    #[tokio::test]
    async fn seller_shop_lists_seller_products() {
        let s = seller(UserId::from(Uuid::new_v4()), true);
        let service = ProductsBySellerService::new(
            FakeSellerQuery {
                sellers: vec![s.clone()],
            },
            FakeProductQuery::with(vec![product(Some(s.id), dec!(5)), product(None, dec!(6))]),
        );

        let products = service.execute(&s.slug).await.unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let service = GetProductService::new(FakeProductQuery::default());

        let result = service.execute("desk-lamp").await;

        assert!(matches!(result, Err(GetProductError::NotFound)));
    }
}
