use std::sync::Arc;

use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListCategoriesUseCase, ListProductsUseCase, ListSellerProductsUseCase,
    ProductsByCategoryUseCase, ProductsBySellerUseCase, UpdateProductUseCase,
};

#[derive(Clone)]
pub struct CatalogUseCases {
    pub list_categories: Arc<dyn ListCategoriesUseCase + Send + Sync>,
    pub create_category: Arc<dyn CreateCategoryUseCase + Send + Sync>,
    pub list_products: Arc<dyn ListProductsUseCase + Send + Sync>,
    pub products_by_category: Arc<dyn ProductsByCategoryUseCase + Send + Sync>,
    pub products_by_seller: Arc<dyn ProductsBySellerUseCase + Send + Sync>,
    pub get_product: Arc<dyn GetProductUseCase + Send + Sync>,
    pub seller_products: Arc<dyn ListSellerProductsUseCase + Send + Sync>,
    pub create_product: Arc<dyn CreateProductUseCase + Send + Sync>,
    pub update_product: Arc<dyn UpdateProductUseCase + Send + Sync>,
    pub delete_product: Arc<dyn DeleteProductUseCase + Send + Sync>,
}
