use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::Authenticator;
use crate::auth::application::domain::entities::{fixtures::buyer, User, UserId};
use crate::auth::application::ports::outgoing::{
    PatchProfileData, TokenClaims, TokenError, TokenProvider, UserQuery, UserQueryError,
};
use crate::auth::application::use_cases::{
    deactivate_account::{DeactivateAccountError, IDeactivateAccountUseCase},
    fetch_profile::{FetchProfileError, IFetchProfileUseCase, UserProfile},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse},
    register_user::{IRegisterUserUseCase, RegisterUserError, RegisterUserRequest},
    update_profile::{IUpdateProfileUseCase, UpdateProfileError},
};
use crate::modules::cart::application::domain::entities::{CartLine, CartOutcome};
use crate::modules::cart::application::ports::incoming::use_cases::{
    ListCartError, ListCartUseCase, ToggleCartItemCommand, ToggleCartItemError,
    ToggleCartItemUseCase,
};
use crate::modules::catalog::application::domain::entities::Category;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase, CreateProductCommand,
    CreateProductError, CreateProductUseCase, DeleteProductError, DeleteProductUseCase,
    GetProductError, GetProductUseCase, ListCategoriesError, ListCategoriesUseCase,
    ListProductsError, ListProductsUseCase, ListSellerProductsError, ListSellerProductsUseCase,
    ProductsByCategoryError, ProductsByCategoryUseCase, ProductsBySellerError,
    ProductsBySellerUseCase, UpdateProductCommand, UpdateProductError, UpdateProductUseCase,
};
use crate::modules::catalog::application::ports::outgoing::{ProductFilter, ProductView};
use crate::modules::order::application::domain::entities::{OrderDetail, OrderLine, OrderView};
use crate::modules::order::application::ports::incoming::use_cases::{
    CheckoutCommand, CheckoutError, CheckoutUseCase, GetOrderError, GetOrderUseCase,
    ListOrdersError, ListOrdersUseCase, SellerOrderItemsError, SellerOrderItemsUseCase,
    SellerOrdersError, SellerOrdersUseCase,
};
use crate::modules::review::application::domain::entities::Review;
use crate::modules::review::application::ports::incoming::use_cases::{
    CreateReviewCommand, CreateReviewError, CreateReviewUseCase, DeleteReviewError,
    DeleteReviewUseCase, ListReviewsError, ListReviewsUseCase,
};
use crate::modules::seller::application::domain::entities::{fixtures::seller, Seller};
use crate::modules::seller::application::ports::incoming::use_cases::{
    ApplySellerCommand, ApplySellerError, ApplySellerUseCase, ApproveSellerError,
    ApproveSellerUseCase, ResolveSellerError, ResolveSellerUseCase,
};
use crate::modules::shipping::application::domain::entities::ShippingAddress;
use crate::modules::shipping::application::ports::incoming::use_cases::{
    CreateShippingAddressError, CreateShippingAddressUseCase, DeleteShippingAddressError,
    DeleteShippingAddressUseCase, GetShippingAddressError, GetShippingAddressUseCase,
    ListShippingAddressesError, ListShippingAddressesUseCase, ShippingAddressCreation,
    ShippingAddressInput, UpdateShippingAddressCommand, UpdateShippingAddressError,
    UpdateShippingAddressUseCase,
};

const NOT_CONFIGURED: &str = "stub not configured for this test";

//
// ──────────────────────────────────────────────────────────
// Token provider
// ──────────────────────────────────────────────────────────
//

/// Accepts any bearer token as the configured principal, or rejects all.
#[derive(Clone)]
pub struct StubTokenProvider {
    principal: Option<(Uuid, bool)>,
    account_active: bool,
}

impl StubTokenProvider {
    pub fn buyer(user_id: Uuid) -> Self {
        Self {
            principal: Some((user_id, false)),
            account_active: true,
        }
    }

    pub fn staff(user_id: Uuid) -> Self {
        Self {
            principal: Some((user_id, true)),
            account_active: true,
        }
    }

    /// Token still verifies, but the account behind it has been deactivated.
    pub fn deactivated(user_id: Uuid) -> Self {
        Self {
            principal: Some((user_id, false)),
            account_active: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            principal: None,
            account_active: true,
        }
    }

    pub fn into_data(self) -> web::Data<Authenticator> {
        let users: Arc<dyn UserQuery> = Arc::new(StubUserQuery {
            principal: self.principal,
            account_active: self.account_active,
        });
        let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(self);
        web::Data::new(Authenticator::new(tokens, users))
    }
}

/// Resolves the token principal to an account in the configured state.
struct StubUserQuery {
    principal: Option<(Uuid, bool)>,
    account_active: bool,
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let Some((id, is_staff)) = self.principal else {
            return Ok(None);
        };
        if id != user_id.value() {
            return Ok(None);
        }

        let mut user = buyer("principal@example.com");
        user.id = user_id;
        user.is_staff = is_staff;
        if !self.account_active {
            user = user.deactivate(Utc::now());
        }
        Ok(Some(user))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
        unimplemented!("{NOT_CONFIGURED}")
    }

    async fn email_exists(&self, _email: &str) -> Result<bool, UserQueryError> {
        unimplemented!("{NOT_CONFIGURED}")
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid, _is_staff: bool) -> Result<String, TokenError> {
        Ok("stub-access-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let (sub, is_staff) = self.principal.ok_or(TokenError::InvalidSignature)?;
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub,
            exp: now + 3600,
            iat: now,
            nbf: now,
            iss: "marketplace".to_string(),
            token_type: "access".to_string(),
            is_staff,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct StubRegisterUser;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUser {
    async fn execute(&self, _request: RegisterUserRequest) -> Result<UserProfile, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(NOT_CONFIGURED.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct StubLoginUser;

#[async_trait]
impl ILoginUserUseCase for StubLoginUser {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

#[derive(Clone, Default)]
pub struct StubFetchProfile;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfile {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        Err(FetchProfileError::UserNotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubUpdateProfile;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfile {
    async fn execute(
        &self,
        _user_id: UserId,
        _patch: PatchProfileData,
    ) -> Result<UserProfile, UpdateProfileError> {
        Err(UpdateProfileError::UserNotFound)
    }
}

#[derive(Clone)]
pub struct StubDeactivateAccount {
    result: Result<(), DeactivateAccountError>,
}

impl StubDeactivateAccount {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(DeactivateAccountError::UserNotFound),
        }
    }
}

#[async_trait]
impl IDeactivateAccountUseCase for StubDeactivateAccount {
    async fn execute(&self, _user_id: UserId) -> Result<(), DeactivateAccountError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Seller
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubResolveSeller {
    result: Result<Seller, ResolveSellerError>,
}

impl StubResolveSeller {
    pub fn approved(user_id: Uuid) -> Self {
        Self {
            result: Ok(seller(UserId::from(user_id), true)),
        }
    }

    pub fn pending() -> Self {
        Self {
            result: Err(ResolveSellerError::NotApproved),
        }
    }

    pub fn not_a_seller() -> Self {
        Self {
            result: Err(ResolveSellerError::NotASeller),
        }
    }
}

#[async_trait]
impl ResolveSellerUseCase for StubResolveSeller {
    async fn execute(&self, _user_id: UserId) -> Result<Seller, ResolveSellerError> {
        self.result.clone()
    }
}

#[derive(Clone, Default)]
pub struct StubApplySeller;

#[async_trait]
impl ApplySellerUseCase for StubApplySeller {
    async fn execute(&self, _command: ApplySellerCommand) -> Result<Seller, ApplySellerError> {
        Err(ApplySellerError::RepositoryError(NOT_CONFIGURED.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct StubApproveSeller;

#[async_trait]
impl ApproveSellerUseCase for StubApproveSeller {
    async fn execute(&self, _seller_id: Uuid, _approved: bool) -> Result<Seller, ApproveSellerError> {
        Err(ApproveSellerError::SellerNotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Catalog
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct StubListCategories;

#[async_trait]
impl ListCategoriesUseCase for StubListCategories {
    async fn execute(&self) -> Result<Vec<Category>, ListCategoriesError> {
        Ok(vec![])
    }
}

#[derive(Clone, Default)]
pub struct StubCreateCategory;

#[async_trait]
impl CreateCategoryUseCase for StubCreateCategory {
    async fn execute(&self, _command: CreateCategoryCommand) -> Result<Category, CreateCategoryError> {
        Err(CreateCategoryError::RepositoryError(NOT_CONFIGURED.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct StubListProducts;

#[async_trait]
impl ListProductsUseCase for StubListProducts {
    async fn execute(&self, _filter: ProductFilter) -> Result<Vec<ProductView>, ListProductsError> {
        Ok(vec![])
    }
}

#[derive(Clone, Default)]
pub struct StubProductsByCategory;

#[async_trait]
impl ProductsByCategoryUseCase for StubProductsByCategory {
    async fn execute(
        &self,
        _category_slug: &str,
    ) -> Result<Vec<ProductView>, ProductsByCategoryError> {
        Err(ProductsByCategoryError::CategoryNotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubProductsBySeller;

#[async_trait]
impl ProductsBySellerUseCase for StubProductsBySeller {
    async fn execute(&self, _seller_slug: &str) -> Result<Vec<ProductView>, ProductsBySellerError> {
        Err(ProductsBySellerError::SellerNotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubGetProduct;

#[async_trait]
impl GetProductUseCase for StubGetProduct {
    async fn execute(&self, _slug: &str) -> Result<ProductView, GetProductError> {
        Err(GetProductError::NotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubSellerProducts;

#[async_trait]
impl ListSellerProductsUseCase for StubSellerProducts {
    async fn execute(&self, _seller: &Seller) -> Result<Vec<ProductView>, ListSellerProductsError> {
        Ok(vec![])
    }
}

#[derive(Clone, Default)]
pub struct StubCreateProduct;

#[async_trait]
impl CreateProductUseCase for StubCreateProduct {
    async fn execute(
        &self,
        _seller: &Seller,
        _command: CreateProductCommand,
    ) -> Result<ProductView, CreateProductError> {
        Err(CreateProductError::RepositoryError(NOT_CONFIGURED.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct StubUpdateProduct;

#[async_trait]
impl UpdateProductUseCase for StubUpdateProduct {
    async fn execute(
        &self,
        _seller: &Seller,
        _slug: &str,
        _command: UpdateProductCommand,
    ) -> Result<ProductView, UpdateProductError> {
        Err(UpdateProductError::ProductNotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubDeleteProduct;

#[async_trait]
impl DeleteProductUseCase for StubDeleteProduct {
    async fn execute(&self, _seller: &Seller, _slug: &str) -> Result<(), DeleteProductError> {
        Err(DeleteProductError::ProductNotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Cart
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct StubListCart;

#[async_trait]
impl ListCartUseCase for StubListCart {
    async fn execute(&self, _user_id: UserId) -> Result<Vec<CartLine>, ListCartError> {
        Ok(vec![])
    }
}

#[derive(Clone, Default)]
pub struct StubToggleCartItem;

#[async_trait]
impl ToggleCartItemUseCase for StubToggleCartItem {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: ToggleCartItemCommand,
    ) -> Result<CartOutcome, ToggleCartItemError> {
        Err(ToggleCartItemError::ProductNotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Orders
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct StubCheckout;

#[async_trait]
impl CheckoutUseCase for StubCheckout {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: CheckoutCommand,
    ) -> Result<OrderDetail, CheckoutError> {
        Err(CheckoutError::EmptyCart)
    }
}

#[derive(Clone, Default)]
pub struct StubListOrders;

#[async_trait]
impl ListOrdersUseCase for StubListOrders {
    async fn execute(&self, _user_id: UserId) -> Result<Vec<OrderDetail>, ListOrdersError> {
        Ok(vec![])
    }
}

#[derive(Clone, Default)]
pub struct StubGetOrder;

#[async_trait]
impl GetOrderUseCase for StubGetOrder {
    async fn execute(&self, _user_id: UserId, _tx_ref: &str) -> Result<OrderDetail, GetOrderError> {
        Err(GetOrderError::NotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubSellerOrders;

#[async_trait]
impl SellerOrdersUseCase for StubSellerOrders {
    async fn execute(&self, _seller: &Seller) -> Result<Vec<OrderView>, SellerOrdersError> {
        Ok(vec![])
    }
}

#[derive(Clone, Default)]
pub struct StubSellerOrderItems;

#[async_trait]
impl SellerOrderItemsUseCase for StubSellerOrderItems {
    async fn execute(
        &self,
        _seller: &Seller,
        _tx_ref: &str,
    ) -> Result<Vec<OrderLine>, SellerOrderItemsError> {
        Err(SellerOrderItemsError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Shipping addresses
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct StubListShippingAddresses;

#[async_trait]
impl ListShippingAddressesUseCase for StubListShippingAddresses {
    async fn execute(
        &self,
        _user_id: UserId,
    ) -> Result<Vec<ShippingAddress>, ListShippingAddressesError> {
        Ok(vec![])
    }
}

#[derive(Clone, Default)]
pub struct StubCreateShippingAddress;

#[async_trait]
impl CreateShippingAddressUseCase for StubCreateShippingAddress {
    async fn execute(
        &self,
        _user_id: UserId,
        _input: ShippingAddressInput,
    ) -> Result<ShippingAddressCreation, CreateShippingAddressError> {
        Err(CreateShippingAddressError::RepositoryError(
            NOT_CONFIGURED.to_string(),
        ))
    }
}

#[derive(Clone, Default)]
pub struct StubGetShippingAddress;

#[async_trait]
impl GetShippingAddressUseCase for StubGetShippingAddress {
    async fn execute(
        &self,
        _user_id: UserId,
        _address_id: Uuid,
    ) -> Result<ShippingAddress, GetShippingAddressError> {
        Err(GetShippingAddressError::NotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubUpdateShippingAddress;

#[async_trait]
impl UpdateShippingAddressUseCase for StubUpdateShippingAddress {
    async fn execute(
        &self,
        _user_id: UserId,
        _address_id: Uuid,
        _command: UpdateShippingAddressCommand,
    ) -> Result<ShippingAddress, UpdateShippingAddressError> {
        Err(UpdateShippingAddressError::NotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubDeleteShippingAddress;

#[async_trait]
impl DeleteShippingAddressUseCase for StubDeleteShippingAddress {
    async fn execute(
        &self,
        _user_id: UserId,
        _address_id: Uuid,
    ) -> Result<(), DeleteShippingAddressError> {
        Err(DeleteShippingAddressError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Reviews
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct StubListReviews;

#[async_trait]
impl ListReviewsUseCase for StubListReviews {
    async fn execute(&self, _product_slug: &str) -> Result<Vec<Review>, ListReviewsError> {
        Err(ListReviewsError::ProductNotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubCreateReview;

#[async_trait]
impl CreateReviewUseCase for StubCreateReview {
    async fn execute(
        &self,
        _user_id: UserId,
        _product_slug: &str,
        _command: CreateReviewCommand,
    ) -> Result<Review, CreateReviewError> {
        Err(CreateReviewError::ProductNotFound)
    }
}

#[derive(Clone, Default)]
pub struct StubDeleteReview;

#[async_trait]
impl DeleteReviewUseCase for StubDeleteReview {
    async fn execute(&self, _user_id: UserId, _review_id: Uuid) -> Result<(), DeleteReviewError> {
        Err(DeleteReviewError::NotFound)
    }
}
