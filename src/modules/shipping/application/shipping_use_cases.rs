use std::sync::Arc;

use crate::modules::shipping::application::ports::incoming::use_cases::{
    CreateShippingAddressUseCase, DeleteShippingAddressUseCase, GetShippingAddressUseCase,
    ListShippingAddressesUseCase, UpdateShippingAddressUseCase,
};

#[derive(Clone)]
pub struct ShippingUseCases {
    pub list: Arc<dyn ListShippingAddressesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateShippingAddressUseCase + Send + Sync>,
    pub get: Arc<dyn GetShippingAddressUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateShippingAddressUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteShippingAddressUseCase + Send + Sync>,
}
