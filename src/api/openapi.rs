use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageData, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth & profile
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, RegisterUserRequestDto, UpdateProfileRequestDto,
};
use crate::auth::application::use_cases::fetch_profile::UserProfile;

// Marketplace
use crate::modules::cart::adapter::incoming::web::routes::{
    CartItemResponseDto, ToggleCartItemRequestDto,
};
use crate::modules::cart::application::domain::entities::{CartLine, CartProduct};
use crate::modules::catalog::adapter::incoming::web::routes::{
    CreateCategoryRequestDto, CreateProductRequestDto, UpdateProductRequestDto,
};
use crate::modules::catalog::application::domain::entities::Category;
use crate::modules::catalog::application::ports::outgoing::product_query::{
    ProductView, SellerShopView,
};
use crate::modules::order::adapter::incoming::web::routes::{
    CheckoutRequestDto, CheckoutResponseDto,
};
use crate::modules::order::application::domain::entities::{
    DeliveryStatus, OrderDetail, OrderLine, OrderLineProduct, OrderView, PaymentStatus,
    ShippingSnapshot,
};
use crate::modules::review::adapter::incoming::web::routes::CreateReviewRequestDto;
use crate::modules::review::application::domain::entities::Review;
use crate::modules::seller::adapter::incoming::web::routes::{
    ApplySellerRequestDto, ApproveSellerRequestDto,
};
use crate::modules::seller::application::domain::entities::Seller;
use crate::modules::shipping::adapter::incoming::web::routes::{
    CreateShippingAddressRequestDto, UpdateShippingAddressRequestDto,
};
use crate::modules::shipping::application::domain::entities::ShippingAddress;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marketplace API",
        version = "1.0.0",
        description = "API documentation for the multi-vendor marketplace backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Profile endpoints
        crate::auth::adapter::incoming::web::routes::get_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,
        crate::auth::adapter::incoming::web::routes::deactivate_account_handler,
        crate::modules::shipping::adapter::incoming::web::routes::list_shipping_addresses_handler,
        crate::modules::shipping::adapter::incoming::web::routes::create_shipping_address_handler,
        crate::modules::shipping::adapter::incoming::web::routes::get_shipping_address_handler,
        crate::modules::shipping::adapter::incoming::web::routes::update_shipping_address_handler,
        crate::modules::shipping::adapter::incoming::web::routes::delete_shipping_address_handler,

        // Seller endpoints
        crate::modules::seller::adapter::incoming::web::routes::apply_seller_handler,
        crate::modules::seller::adapter::incoming::web::routes::approve_seller_handler,
        crate::modules::catalog::adapter::incoming::web::routes::list_seller_products_handler,
        crate::modules::catalog::adapter::incoming::web::routes::create_product_handler,
        crate::modules::catalog::adapter::incoming::web::routes::update_product_handler,
        crate::modules::catalog::adapter::incoming::web::routes::delete_product_handler,
        crate::modules::order::adapter::incoming::web::routes::seller_orders_handler,
        crate::modules::order::adapter::incoming::web::routes::seller_order_items_handler,

        // Shop endpoints
        crate::modules::catalog::adapter::incoming::web::routes::list_categories_handler,
        crate::modules::catalog::adapter::incoming::web::routes::create_category_handler,
        crate::modules::catalog::adapter::incoming::web::routes::products_by_category_handler,
        crate::modules::catalog::adapter::incoming::web::routes::products_by_seller_handler,
        crate::modules::catalog::adapter::incoming::web::routes::list_products_handler,
        crate::modules::catalog::adapter::incoming::web::routes::get_product_handler,
        crate::modules::review::adapter::incoming::web::routes::list_reviews_handler,
        crate::modules::review::adapter::incoming::web::routes::create_review_handler,
        crate::modules::review::adapter::incoming::web::routes::delete_review_handler,

        // Cart & orders
        crate::modules::cart::adapter::incoming::web::routes::list_cart_handler,
        crate::modules::cart::adapter::incoming::web::routes::toggle_cart_item_handler,
        crate::modules::order::adapter::incoming::web::routes::checkout_handler,
        crate::modules::order::adapter::incoming::web::routes::list_orders_handler,
        crate::modules::order::adapter::incoming::web::routes::get_order_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            MessageResponse,
            MessageData,

            // Auth DTOs
            RegisterUserRequestDto,
            LoginRequestDto,
            LoginResponse,
            UpdateProfileRequestDto,
            UserProfile,

            // Shipping
            CreateShippingAddressRequestDto,
            UpdateShippingAddressRequestDto,
            ShippingAddress,

            // Sellers
            ApplySellerRequestDto,
            ApproveSellerRequestDto,
            Seller,

            // Catalog
            CreateCategoryRequestDto,
            CreateProductRequestDto,
            UpdateProductRequestDto,
            Category,
            ProductView,
            SellerShopView,

            // Cart
            ToggleCartItemRequestDto,
            CartItemResponseDto,
            CartLine,
            CartProduct,

            // Orders
            CheckoutRequestDto,
            CheckoutResponseDto,
            OrderView,
            OrderDetail,
            OrderLine,
            OrderLineProduct,
            ShippingSnapshot,
            DeliveryStatus,
            PaymentStatus,

            // Reviews
            CreateReviewRequestDto,
            Review
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Profile endpoints"),
        (name = "shipping", description = "Shipping address endpoints"),
        (name = "sellers", description = "Seller onboarding and approval"),
        (name = "seller", description = "Seller-side product and order management"),
        (name = "shop", description = "Public catalog browsing and reviews"),
        (name = "cart", description = "Cart endpoints"),
        (name = "orders", description = "Checkout and order history"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
