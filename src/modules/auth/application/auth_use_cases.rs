use std::sync::Arc;

use crate::auth::application::use_cases::{
    deactivate_account::IDeactivateAccountUseCase, fetch_profile::IFetchProfileUseCase,
    login_user::ILoginUserUseCase, register_user::IRegisterUserUseCase,
    update_profile::IUpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub deactivate: Arc<dyn IDeactivateAccountUseCase + Send + Sync>,
}
