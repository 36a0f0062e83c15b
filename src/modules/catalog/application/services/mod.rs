pub mod category_services;
pub mod create_product_service;
pub mod delete_product_service;
pub mod product_read_services;
pub mod update_product_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use category_services::{CreateCategoryService, ListCategoriesService};
pub use create_product_service::CreateProductService;
pub use delete_product_service::DeleteProductService;
pub use product_read_services::{
    GetProductService, ListProductsService, ListSellerProductsService, ProductsByCategoryService,
    ProductsBySellerService,
};
pub use update_product_service::UpdateProductService;
