pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;

use crate::auth::adapter::incoming::web::extractors::Authenticator;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::auth::application::use_cases::{
    deactivate_account::DeactivateAccountUseCase, fetch_profile::FetchProfileUseCase,
    login_user::LoginUserUseCase, register_user::RegisterUserUseCase,
    update_profile::UpdateProfileUseCase,
};
use crate::modules::cart::adapter::outgoing::{CartQueryPostgres, CartRepositoryPostgres};
use crate::modules::cart::application::cart_use_cases::CartUseCases;
use crate::modules::cart::application::services::{ListCartService, ToggleCartItemService};
use crate::modules::catalog::adapter::outgoing::{
    CategoryQueryPostgres, CategoryRepositoryPostgres, ProductQueryPostgres,
    ProductRepositoryPostgres,
};
use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::application::services::{
    CreateCategoryService, CreateProductService, DeleteProductService, GetProductService,
    ListCategoriesService, ListProductsService, ListSellerProductsService,
    ProductsByCategoryService, ProductsBySellerService, UpdateProductService,
};
use crate::modules::order::adapter::outgoing::{OrderQueryPostgres, OrderRepositoryPostgres};
use crate::modules::order::application::order_use_cases::OrderUseCases;
use crate::modules::order::application::services::{
    CheckoutService, GetOrderService, ListOrdersService, SellerOrderItemsService,
    SellerOrdersService,
};
use crate::modules::review::adapter::outgoing::{ReviewQueryPostgres, ReviewRepositoryPostgres};
use crate::modules::review::application::review_use_cases::ReviewUseCases;
use crate::modules::review::application::services::{
    CreateReviewService, DeleteReviewService, ListReviewsService,
};
use crate::modules::seller::adapter::outgoing::{SellerQueryPostgres, SellerRepositoryPostgres};
use crate::modules::seller::application::seller_use_cases::SellerUseCases;
use crate::modules::seller::application::services::{
    ApplySellerService, ApproveSellerService, ResolveSellerService,
};
use crate::modules::shipping::adapter::outgoing::{
    ShippingAddressQueryPostgres, ShippingAddressRepositoryPostgres,
};
use crate::modules::shipping::application::services::{
    CreateShippingAddressService, DeleteShippingAddressService, GetShippingAddressService,
    ListShippingAddressesService, UpdateShippingAddressService,
};
use crate::modules::shipping::application::shipping_use_cases::ShippingUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::config::{load_env_files, AppConfig};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub seller: SellerUseCases,
    pub catalog: CatalogUseCases,
    pub cart: CartUseCases,
    pub order: OrderUseCases,
    pub shipping: ShippingUseCases,
    pub review: ReviewUseCases,
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!(error = %err, "{context}");
    std::io::Error::other(format!("{context}: {err}"))
}

fn build_state(
    db: &Arc<DatabaseConnection>,
    token_service: &JwtTokenService,
    password_hasher: Arc<dyn PasswordHasher>,
) -> AppState {
    // Auth
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            password_hasher,
            Arc::new(token_service.clone()),
        )),
        fetch_profile: Arc::new(FetchProfileUseCase::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileUseCase::new(user_repo.clone())),
        deactivate: Arc::new(DeactivateAccountUseCase::new(user_query.clone(), user_repo)),
    };

    // Seller
    let seller_query = SellerQueryPostgres::new(Arc::clone(db));
    let seller_repo = SellerRepositoryPostgres::new(Arc::clone(db));

    let seller = SellerUseCases {
        apply: Arc::new(ApplySellerService::new(
            user_query,
            seller_query.clone(),
            seller_repo.clone(),
        )),
        approve: Arc::new(ApproveSellerService::new(seller_repo)),
        resolve: Arc::new(ResolveSellerService::new(seller_query.clone())),
    };

    // Catalog
    let category_query = CategoryQueryPostgres::new(Arc::clone(db));
    let category_repo = CategoryRepositoryPostgres::new(Arc::clone(db));
    let product_query = ProductQueryPostgres::new(Arc::clone(db));
    let product_repo = ProductRepositoryPostgres::new(Arc::clone(db));

    let catalog = CatalogUseCases {
        list_categories: Arc::new(ListCategoriesService::new(category_query.clone())),
        create_category: Arc::new(CreateCategoryService::new(
            category_query.clone(),
            category_repo,
        )),
        list_products: Arc::new(ListProductsService::new(product_query.clone())),
        products_by_category: Arc::new(ProductsByCategoryService::new(
            category_query.clone(),
            product_query.clone(),
        )),
        products_by_seller: Arc::new(ProductsBySellerService::new(
            seller_query,
            product_query.clone(),
        )),
        get_product: Arc::new(GetProductService::new(product_query.clone())),
        seller_products: Arc::new(ListSellerProductsService::new(product_query.clone())),
        create_product: Arc::new(CreateProductService::new(
            category_query.clone(),
            product_query.clone(),
            product_repo.clone(),
        )),
        update_product: Arc::new(UpdateProductService::new(
            category_query,
            product_query.clone(),
            product_repo.clone(),
        )),
        delete_product: Arc::new(DeleteProductService::new(
            product_query.clone(),
            product_repo,
        )),
    };

    // Cart
    let cart_query = CartQueryPostgres::new(Arc::clone(db));
    let cart_repo = CartRepositoryPostgres::new(Arc::clone(db));

    let cart = CartUseCases {
        list: Arc::new(ListCartService::new(cart_query.clone())),
        toggle: Arc::new(ToggleCartItemService::new(
            product_query.clone(),
            cart_repo,
            cart_query.clone(),
        )),
    };

    // Shipping addresses
    let address_query = ShippingAddressQueryPostgres::new(Arc::clone(db));
    let address_repo = ShippingAddressRepositoryPostgres::new(Arc::clone(db));

    let shipping = ShippingUseCases {
        list: Arc::new(ListShippingAddressesService::new(address_query.clone())),
        create: Arc::new(CreateShippingAddressService::new(
            address_query.clone(),
            address_repo.clone(),
        )),
        get: Arc::new(GetShippingAddressService::new(address_query.clone())),
        update: Arc::new(UpdateShippingAddressService::new(
            address_query.clone(),
            address_repo.clone(),
        )),
        delete: Arc::new(DeleteShippingAddressService::new(address_repo)),
    };

    // Orders
    let order_query = OrderQueryPostgres::new(Arc::clone(db));
    let order_repo = OrderRepositoryPostgres::new(Arc::clone(db));

    let order = OrderUseCases {
        checkout: Arc::new(CheckoutService::new(
            cart_query,
            address_query,
            order_repo,
            order_query.clone(),
        )),
        list: Arc::new(ListOrdersService::new(order_query.clone())),
        get: Arc::new(GetOrderService::new(order_query.clone())),
        seller_orders: Arc::new(SellerOrdersService::new(order_query.clone())),
        seller_items: Arc::new(SellerOrderItemsService::new(order_query)),
    };

    // Reviews
    let review_query = ReviewQueryPostgres::new(Arc::clone(db));
    let review_repo = ReviewRepositoryPostgres::new(Arc::clone(db));

    let review = ReviewUseCases {
        list: Arc::new(ListReviewsService::new(
            product_query.clone(),
            review_query.clone(),
        )),
        create: Arc::new(CreateReviewService::new(
            product_query,
            review_query.clone(),
            review_repo.clone(),
        )),
        delete: Arc::new(DeleteReviewService::new(review_query, review_repo)),
    };

    AppState {
        auth,
        seller,
        catalog,
        cart,
        order,
        shipping,
        review,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let environment = load_env_files();
    info!(environment = %environment, "Starting marketplace backend");

    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;
    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("Invalid JWT configuration", e))?;
    let hasher =
        Argon2Hasher::from_env().map_err(|e| startup_error("Invalid Argon2 configuration", e))?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;
    let db_arc = Arc::new(conn);

    let token_service = JwtTokenService::new(jwt_config);
    let state = build_state(&db_arc, &token_service, Arc::new(hasher));
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(token_service);
    let account_query: Arc<dyn UserQuery> = Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));
    let authenticator = Authenticator::new(token_provider, account_query);

    let server_url = format!("{}:{}", config.host, config.port);
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(authenticator.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::modules::cart::adapter::incoming::web::routes as cart_routes;
    use crate::modules::catalog::adapter::incoming::web::routes as catalog_routes;
    use crate::modules::order::adapter::incoming::web::routes as order_routes;
    use crate::modules::review::adapter::incoming::web::routes as review_routes;
    use crate::modules::seller::adapter::incoming::web::routes as seller_routes;
    use crate::modules::shipping::adapter::incoming::web::routes as shipping_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth & profile
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::get_profile_handler);
    cfg.service(auth_routes::update_profile_handler);
    cfg.service(auth_routes::deactivate_account_handler);
    // Shipping addresses
    cfg.service(shipping_routes::list_shipping_addresses_handler);
    cfg.service(shipping_routes::create_shipping_address_handler);
    cfg.service(shipping_routes::get_shipping_address_handler);
    cfg.service(shipping_routes::update_shipping_address_handler);
    cfg.service(shipping_routes::delete_shipping_address_handler);
    // Sellers
    cfg.service(seller_routes::apply_seller_handler);
    cfg.service(seller_routes::approve_seller_handler);
    cfg.service(catalog_routes::list_seller_products_handler);
    cfg.service(catalog_routes::create_product_handler);
    cfg.service(catalog_routes::update_product_handler);
    cfg.service(catalog_routes::delete_product_handler);
    cfg.service(order_routes::seller_orders_handler);
    cfg.service(order_routes::seller_order_items_handler);
    // Shop
    cfg.service(catalog_routes::list_categories_handler);
    cfg.service(catalog_routes::create_category_handler);
    cfg.service(catalog_routes::products_by_category_handler);
    cfg.service(catalog_routes::products_by_seller_handler);
    cfg.service(catalog_routes::list_products_handler);
    cfg.service(review_routes::list_reviews_handler);
    cfg.service(review_routes::create_review_handler);
    cfg.service(catalog_routes::get_product_handler);
    cfg.service(review_routes::delete_review_handler);
    cfg.service(cart_routes::list_cart_handler);
    cfg.service(cart_routes::toggle_cart_item_handler);
    cfg.service(order_routes::checkout_handler);
    cfg.service(order_routes::list_orders_handler);
    cfg.service(order_routes::get_order_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
