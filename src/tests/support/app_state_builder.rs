use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::{
    deactivate_account::IDeactivateAccountUseCase, fetch_profile::IFetchProfileUseCase,
    login_user::ILoginUserUseCase, register_user::IRegisterUserUseCase,
    update_profile::IUpdateProfileUseCase,
};
use crate::modules::cart::application::cart_use_cases::CartUseCases;
use crate::modules::cart::application::ports::incoming::use_cases::{
    ListCartUseCase, ToggleCartItemUseCase,
};
use crate::modules::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateCategoryUseCase, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListCategoriesUseCase, ListProductsUseCase, ListSellerProductsUseCase,
    ProductsByCategoryUseCase, ProductsBySellerUseCase, UpdateProductUseCase,
};
use crate::modules::order::application::order_use_cases::OrderUseCases;
use crate::modules::order::application::ports::incoming::use_cases::{
    CheckoutUseCase, GetOrderUseCase, ListOrdersUseCase, SellerOrderItemsUseCase,
    SellerOrdersUseCase,
};
use crate::modules::review::application::ports::incoming::use_cases::{
    CreateReviewUseCase, DeleteReviewUseCase, ListReviewsUseCase,
};
use crate::modules::review::application::review_use_cases::ReviewUseCases;
use crate::modules::seller::application::ports::incoming::use_cases::{
    ApplySellerUseCase, ApproveSellerUseCase, ResolveSellerUseCase,
};
use crate::modules::seller::application::seller_use_cases::SellerUseCases;
use crate::modules::shipping::application::ports::incoming::use_cases::{
    CreateShippingAddressUseCase, DeleteShippingAddressUseCase, GetShippingAddressUseCase,
    ListShippingAddressesUseCase, UpdateShippingAddressUseCase,
};
use crate::modules::shipping::application::shipping_use_cases::ShippingUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` whose every use case is a stub, overridable one by one.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    seller: SellerUseCases,
    catalog: CatalogUseCases,
    cart: CartUseCases,
    order: OrderUseCases,
    shipping: ShippingUseCases,
    review: ReviewUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUser),
                login: Arc::new(StubLoginUser),
                fetch_profile: Arc::new(StubFetchProfile),
                update_profile: Arc::new(StubUpdateProfile),
                deactivate: Arc::new(StubDeactivateAccount::not_found()),
            },
            seller: SellerUseCases {
                apply: Arc::new(StubApplySeller),
                approve: Arc::new(StubApproveSeller),
                resolve: Arc::new(StubResolveSeller::not_a_seller()),
            },
            catalog: CatalogUseCases {
                list_categories: Arc::new(StubListCategories),
                create_category: Arc::new(StubCreateCategory),
                list_products: Arc::new(StubListProducts),
                products_by_category: Arc::new(StubProductsByCategory),
                products_by_seller: Arc::new(StubProductsBySeller),
                get_product: Arc::new(StubGetProduct),
                seller_products: Arc::new(StubSellerProducts),
                create_product: Arc::new(StubCreateProduct),
                update_product: Arc::new(StubUpdateProduct),
                delete_product: Arc::new(StubDeleteProduct),
            },
            cart: CartUseCases {
                list: Arc::new(StubListCart),
                toggle: Arc::new(StubToggleCartItem),
            },
            order: OrderUseCases {
                checkout: Arc::new(StubCheckout),
                list: Arc::new(StubListOrders),
                get: Arc::new(StubGetOrder),
                seller_orders: Arc::new(StubSellerOrders),
                seller_items: Arc::new(StubSellerOrderItems),
            },
            shipping: ShippingUseCases {
                list: Arc::new(StubListShippingAddresses),
                create: Arc::new(StubCreateShippingAddress),
                get: Arc::new(StubGetShippingAddress),
                update: Arc::new(StubUpdateShippingAddress),
                delete: Arc::new(StubDeleteShippingAddress),
            },
            review: ReviewUseCases {
                list: Arc::new(StubListReviews),
                create: Arc::new(StubCreateReview),
                delete: Arc::new(StubDeleteReview),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Auth

    pub fn with_register_user(mut self, uc: impl IRegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(mut self, uc: impl IFetchProfileUseCase + 'static) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl IUpdateProfileUseCase + 'static) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_deactivate_account(
        mut self,
        uc: impl IDeactivateAccountUseCase + 'static,
    ) -> Self {
        self.auth.deactivate = Arc::new(uc);
        self
    }

    // Seller

    pub fn with_apply_seller(mut self, uc: impl ApplySellerUseCase + 'static) -> Self {
        self.seller.apply = Arc::new(uc);
        self
    }

    pub fn with_approve_seller(mut self, uc: impl ApproveSellerUseCase + 'static) -> Self {
        self.seller.approve = Arc::new(uc);
        self
    }

    pub fn with_resolve_seller(mut self, uc: impl ResolveSellerUseCase + 'static) -> Self {
        self.seller.resolve = Arc::new(uc);
        self
    }

    // Catalog

    pub fn with_list_categories(mut self, uc: impl ListCategoriesUseCase + 'static) -> Self {
        self.catalog.list_categories = Arc::new(uc);
        self
    }

    pub fn with_create_category(mut self, uc: impl CreateCategoryUseCase + 'static) -> Self {
        self.catalog.create_category = Arc::new(uc);
        self
    }

    pub fn with_list_products(mut self, uc: impl ListProductsUseCase + 'static) -> Self {
        self.catalog.list_products = Arc::new(uc);
        self
    }

    pub fn with_products_by_category(
        mut self,
        uc: impl ProductsByCategoryUseCase + 'static,
    ) -> Self {
        self.catalog.products_by_category = Arc::new(uc);
        self
    }

    pub fn with_products_by_seller(mut self, uc: impl ProductsBySellerUseCase + 'static) -> Self {
        self.catalog.products_by_seller = Arc::new(uc);
        self
    }

    pub fn with_get_product(mut self, uc: impl GetProductUseCase + 'static) -> Self {
        self.catalog.get_product = Arc::new(uc);
        self
    }

    pub fn with_seller_products(mut self, uc: impl ListSellerProductsUseCase + 'static) -> Self {
        self.catalog.seller_products = Arc::new(uc);
        self
    }

    pub fn with_create_product(mut self, uc: impl CreateProductUseCase + 'static) -> Self {
        self.catalog.create_product = Arc::new(uc);
        self
    }

    pub fn with_update_product(mut self, uc: impl UpdateProductUseCase + 'static) -> Self {
        self.catalog.update_product = Arc::new(uc);
        self
    }

    pub fn with_delete_product(mut self, uc: impl DeleteProductUseCase + 'static) -> Self {
        self.catalog.delete_product = Arc::new(uc);
        self
    }

    // Cart

    pub fn with_list_cart(mut self, uc: impl ListCartUseCase + 'static) -> Self {
        self.cart.list = Arc::new(uc);
        self
    }

    pub fn with_toggle_cart_item(mut self, uc: impl ToggleCartItemUseCase + 'static) -> Self {
        self.cart.toggle = Arc::new(uc);
        self
    }

    // Orders

    pub fn with_checkout(mut self, uc: impl CheckoutUseCase + 'static) -> Self {
        self.order.checkout = Arc::new(uc);
        self
    }

    pub fn with_list_orders(mut self, uc: impl ListOrdersUseCase + 'static) -> Self {
        self.order.list = Arc::new(uc);
        self
    }

    pub fn with_get_order(mut self, uc: impl GetOrderUseCase + 'static) -> Self {
        self.order.get = Arc::new(uc);
        self
    }

    pub fn with_seller_orders(mut self, uc: impl SellerOrdersUseCase + 'static) -> Self {
        self.order.seller_orders = Arc::new(uc);
        self
    }

    pub fn with_seller_order_items(mut self, uc: impl SellerOrderItemsUseCase + 'static) -> Self {
        self.order.seller_items = Arc::new(uc);
        self
    }

    // Shipping addresses

    pub fn with_list_shipping_addresses(
        mut self,
        uc: impl ListShippingAddressesUseCase + 'static,
    ) -> Self {
        self.shipping.list = Arc::new(uc);
        self
    }

    pub fn with_create_shipping_address(
        mut self,
        uc: impl CreateShippingAddressUseCase + 'static,
    ) -> Self {
        self.shipping.create = Arc::new(uc);
        self
    }

    pub fn with_get_shipping_address(
        mut self,
        uc: impl GetShippingAddressUseCase + 'static,
    ) -> Self {
        self.shipping.get = Arc::new(uc);
        self
    }

    pub fn with_update_shipping_address(
        mut self,
        uc: impl UpdateShippingAddressUseCase + 'static,
    ) -> Self {
        self.shipping.update = Arc::new(uc);
        self
    }

    pub fn with_delete_shipping_address(
        mut self,
        uc: impl DeleteShippingAddressUseCase + 'static,
    ) -> Self {
        self.shipping.delete = Arc::new(uc);
        self
    }

    // Reviews

    pub fn with_list_reviews(mut self, uc: impl ListReviewsUseCase + 'static) -> Self {
        self.review.list = Arc::new(uc);
        self
    }

    pub fn with_create_review(mut self, uc: impl CreateReviewUseCase + 'static) -> Self {
        self.review.create = Arc::new(uc);
        self
    }

    pub fn with_delete_review(mut self, uc: impl DeleteReviewUseCase + 'static) -> Self {
        self.review.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            seller: self.seller,
            catalog: self.catalog,
            cart: self.cart,
            order: self.order,
            shipping: self.shipping,
            review: self.review,
        })
    }
}
