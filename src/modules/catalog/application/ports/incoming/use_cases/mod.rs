mod create_category_use_case;
mod create_product_use_case;
mod delete_product_use_case;
mod get_product_use_case;
mod list_categories_use_case;
mod list_products_use_case;
mod list_seller_products_use_case;
mod products_by_category_use_case;
mod products_by_seller_use_case;
mod update_product_use_case;

pub use create_category_use_case::{
    CreateCategoryCommand, CreateCategoryCommandError, CreateCategoryError, CreateCategoryUseCase,
};
pub use create_product_use_case::{
    CreateProductCommand, CreateProductCommandError, CreateProductError, CreateProductUseCase,
};
pub use delete_product_use_case::{DeleteProductError, DeleteProductUseCase};
pub use get_product_use_case::{GetProductError, GetProductUseCase};
pub use list_categories_use_case::{ListCategoriesError, ListCategoriesUseCase};
pub use list_products_use_case::{ListProductsError, ListProductsUseCase};
pub use list_seller_products_use_case::{ListSellerProductsError, ListSellerProductsUseCase};
pub use products_by_category_use_case::{ProductsByCategoryError, ProductsByCategoryUseCase};
pub use products_by_seller_use_case::{ProductsBySellerError, ProductsBySellerUseCase};
pub use update_product_use_case::{
    UpdateProductCommand, UpdateProductCommandError, UpdateProductError, UpdateProductUseCase,
};
