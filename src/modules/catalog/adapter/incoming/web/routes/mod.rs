mod create_category;
mod delete_product;
mod get_product;
mod list_categories;
mod list_products;
mod products_by_category;
mod products_by_seller;
mod seller_products;
mod update_product;

pub use create_category::{create_category_handler, CreateCategoryRequestDto};
pub use delete_product::delete_product_handler;
pub use get_product::get_product_handler;
pub use list_categories::list_categories_handler;
pub use list_products::{list_products_handler, ListProductsQuery};
pub use products_by_category::products_by_category_handler;
pub use products_by_seller::products_by_seller_handler;
pub use seller_products::{
    create_product_handler, list_seller_products_handler, CreateProductRequestDto,
};
pub use update_product::{update_product_handler, UpdateProductRequestDto};
pub use create_category::__path_create_category_handler;
pub use delete_product::__path_delete_product_handler;
pub use get_product::__path_get_product_handler;
pub use list_categories::__path_list_categories_handler;
pub use list_products::__path_list_products_handler;
pub use products_by_category::__path_products_by_category_handler;
pub use products_by_seller::__path_products_by_seller_handler;
pub use seller_products::__path_create_product_handler;
pub use seller_products::__path_list_seller_products_handler;
pub use update_product::__path_update_product_handler;
