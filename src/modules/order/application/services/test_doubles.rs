//! In-memory order reads shared by the service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::application::domain::entities::{OrderDetail, OrderLine, OrderView};
use crate::modules::order::application::ports::outgoing::{OrderQuery, OrderQueryError};

#[derive(Clone, Default)]
pub struct FakeOrderQuery {
    /// (owner, order)
    pub orders: Vec<(UserId, OrderDetail)>,
    /// seller id -> tx_ref -> that seller's lines
    pub seller_lines: HashMap<Uuid, HashMap<String, Vec<OrderLine>>>,
}

impl FakeOrderQuery {
    pub fn with(orders: Vec<(UserId, OrderDetail)>) -> Self {
        Self {
            orders,
            ..Default::default()
        }
    }
}

#[async_trait]
impl OrderQuery for FakeOrderQuery {
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<OrderDetail>, OrderQueryError> {
        Ok(self
            .orders
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, o)| o.clone())
            .collect())
    }

    async fn find_for_user(
        &self,
        user_id: UserId,
        tx_ref: &str,
    ) -> Result<Option<OrderDetail>, OrderQueryError> {
        Ok(self
            .orders
            .iter()
            .find(|(owner, o)| *owner == user_id && o.order.tx_ref == tx_ref)
            .map(|(_, o)| o.clone()))
    }

    async fn list_for_seller(&self, seller_id: Uuid) -> Result<Vec<OrderView>, OrderQueryError> {
        let refs = self.seller_lines.get(&seller_id);
        Ok(self
            .orders
            .iter()
            .filter(|(_, o)| refs.is_some_and(|r| r.contains_key(&o.order.tx_ref)))
            .map(|(_, o)| o.order.clone())
            .collect())
    }

    async fn seller_items(
        &self,
        seller_id: Uuid,
        tx_ref: &str,
    ) -> Result<Option<Vec<OrderLine>>, OrderQueryError> {
        Ok(self
            .seller_lines
            .get(&seller_id)
            .and_then(|r| r.get(tx_ref))
            .cloned())
    }
}
