use std::sync::Arc;

use crate::modules::cart::application::ports::incoming::use_cases::{
    ListCartUseCase, ToggleCartItemUseCase,
};

#[derive(Clone)]
pub struct CartUseCases {
    pub list: Arc<dyn ListCartUseCase + Send + Sync>,
    pub toggle: Arc<dyn ToggleCartItemUseCase + Send + Sync>,
}
