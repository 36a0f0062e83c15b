pub mod category_query;
pub mod category_repository;
pub mod product_query;
pub mod product_repository;

pub use category_query::{CategoryQuery, CategoryQueryError};
pub use category_repository::{CategoryRepository, CategoryRepositoryError, CreateCategoryData};
pub use product_query::{
    ProductFilter, ProductQuery, ProductQueryError, ProductView, SellerShopView,
};
pub use product_repository::{
    CreateProductData, ProductRepository, ProductRepositoryError, UpdateProductData,
};
