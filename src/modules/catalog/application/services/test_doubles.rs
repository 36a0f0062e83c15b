//! In-memory catalog ports shared by the service tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{Category, Product};
use crate::modules::catalog::application::ports::outgoing::{
    CategoryQuery, CategoryQueryError, CategoryRepository, CategoryRepositoryError,
    CreateCategoryData, CreateProductData, ProductFilter, ProductQuery, ProductQueryError,
    ProductRepository, ProductRepositoryError, ProductView, UpdateProductData,
};
use crate::shared::soft_delete::DeletionStatus;

pub fn view_of(product: &Product) -> ProductView {
    ProductView {
        seller: None,
        name: product.name.clone(),
        slug: product.slug.clone(),
        desc: product.desc.clone(),
        price_old: product.price_old,
        price_current: product.price_current,
        category: None,
        in_stock: product.in_stock,
        image1: product.image1.clone(),
        image2: product.image2.clone(),
        image3: product.image3.clone(),
        created_at: Utc::now(),
    }
}

#[derive(Clone, Default)]
pub struct FakeCategoryQuery {
    pub categories: Vec<Category>,
}

#[async_trait]
impl CategoryQuery for FakeCategoryQuery {
    async fn list(&self) -> Result<Vec<Category>, CategoryQueryError> {
        Ok(self.categories.clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, CategoryQueryError> {
        Ok(self.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn slug_taken(&self, slug: &str) -> Result<bool, CategoryQueryError> {
        Ok(self.categories.iter().any(|c| c.slug == slug))
    }
}

#[derive(Clone)]
pub struct FakeCategoryRepository {
    pub result: Result<(), CategoryRepositoryError>,
}

#[async_trait]
impl CategoryRepository for FakeCategoryRepository {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        self.result.clone().map(|_| Category {
            id: Uuid::new_v4(),
            name: data.name,
            slug: data.slug,
            image: data.image,
        })
    }
}

#[derive(Clone, Default)]
pub struct FakeProductQuery {
    pub products: Vec<Product>,
    pub taken_slugs: Vec<String>,
    pub seen_filter: Arc<Mutex<Option<ProductFilter>>>,
}

impl FakeProductQuery {
    pub fn with(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }
}

#[async_trait]
impl ProductQuery for FakeProductQuery {
    async fn list(&self, filter: ProductFilter) -> Result<Vec<ProductView>, ProductQueryError> {
        *self.seen_filter.lock().unwrap() = Some(filter);
        Ok(self.products.iter().map(view_of).collect())
    }

    async fn list_by_category(
        &self,
        category_id: Uuid,
    ) -> Result<Vec<ProductView>, ProductQueryError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category_id == Some(category_id))
            .map(view_of)
            .collect())
    }

    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<ProductView>, ProductQueryError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.seller_id == Some(seller_id))
            .map(view_of)
            .collect())
    }

    async fn find_view_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ProductView>, ProductQueryError> {
        Ok(self.products.iter().find(|p| p.slug == slug).map(view_of))
    }

    async fn find_view_by_id(
        &self,
        product_id: Uuid,
    ) -> Result<Option<ProductView>, ProductQueryError> {
        Ok(self.products.iter().find(|p| p.id == product_id).map(view_of))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, ProductQueryError> {
        Ok(self.products.iter().find(|p| p.slug == slug).cloned())
    }

    async fn slug_taken(&self, slug: &str) -> Result<bool, ProductQueryError> {
        Ok(self.taken_slugs.iter().any(|s| s == slug)
            || self.products.iter().any(|p| p.slug == slug))
    }
}

/// Records every write and answers with `product` (or `error`).
#[derive(Clone)]
pub struct FakeProductRepository {
    pub product: Product,
    pub error: Option<ProductRepositoryError>,
    pub created: Arc<Mutex<Option<CreateProductData>>>,
    pub updated: Arc<Mutex<Option<UpdateProductData>>>,
    pub deleted: Arc<Mutex<Option<DeletionStatus>>>,
}

impl FakeProductRepository {
    pub fn returning(product: Product) -> Self {
        Self {
            product,
            error: None,
            created: Arc::default(),
            updated: Arc::default(),
            deleted: Arc::default(),
        }
    }

    pub fn failing(product: Product, error: ProductRepositoryError) -> Self {
        Self {
            error: Some(error),
            ..Self::returning(product)
        }
    }

    fn outcome(&self) -> Result<Product, ProductRepositoryError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.product.clone()),
        }
    }
}

#[async_trait]
impl ProductRepository for FakeProductRepository {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let slug = data.slug.clone();
        *self.created.lock().unwrap() = Some(data);
        self.outcome().map(|mut p| {
            p.slug = slug;
            p
        })
    }

    async fn update_product(
        &self,
        _product_id: Uuid,
        data: UpdateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        *self.updated.lock().unwrap() = Some(data);
        self.outcome()
    }

    async fn soft_delete_product(
        &self,
        _product_id: Uuid,
        deletion: DeletionStatus,
    ) -> Result<(), ProductRepositoryError> {
        *self.deleted.lock().unwrap() = Some(deletion);
        self.outcome().map(|_| ())
    }
}
