use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::seller::application::{
    domain::entities::Seller,
    ports::{
        incoming::use_cases::{ApplySellerCommand, ApplySellerError, ApplySellerUseCase},
        outgoing::{SellerApplication, SellerQuery, SellerRepository, SellerRepositoryError},
    },
};
use crate::shared::slug::unique_slug;

pub struct ApplySellerService<U, Q, R>
where
    U: UserQuery,
    Q: SellerQuery,
    R: SellerRepository,
{
    user_query: U,
    seller_query: Q,
    seller_repository: R,
}

impl<U, Q, R> ApplySellerService<U, Q, R>
where
    U: UserQuery,
    Q: SellerQuery,
    R: SellerRepository,
{
    pub fn new(user_query: U, seller_query: Q, seller_repository: R) -> Self {
        Self {
            user_query,
            seller_query,
            seller_repository,
        }
    }
}

#[async_trait]
impl<U, Q, R> ApplySellerUseCase for ApplySellerService<U, Q, R>
where
    U: UserQuery + Send + Sync,
    Q: SellerQuery + Send + Sync,
    R: SellerRepository + Send + Sync,
{
    async fn execute(&self, command: ApplySellerCommand) -> Result<Seller, ApplySellerError> {
        let user_id = command.user_id();

        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| ApplySellerError::RepositoryError(e.to_string()))?
            .ok_or(ApplySellerError::UserNotFound)?;

        // Role switches on application; selling still waits for approval.
        let promoted = user.promote_to_seller();

        let seller_query = &self.seller_query;
        let slug = unique_slug(&command.profile().business_name, |candidate| async move {
            seller_query.slug_taken(&candidate, user_id).await
        })
        .await
        .map_err(|e| ApplySellerError::SlugUnavailable(e.to_string()))?;

        let seller = self
            .seller_repository
            .save_application(SellerApplication {
                user_id,
                account_type: promoted.account_type,
                slug,
                profile: command.into_profile(),
            })
            .await
            .map_err(|e| match e {
                SellerRepositoryError::UserNotFound => ApplySellerError::UserNotFound,
                SellerRepositoryError::SlugAlreadyExists => {
                    ApplySellerError::SlugUnavailable(e.to_string())
                }
                other => ApplySellerError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, seller_id = %seller.id, "Seller application saved");

        Ok(seller)
    }
}
