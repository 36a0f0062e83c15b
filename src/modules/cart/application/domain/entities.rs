use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::catalog::application::ports::outgoing::SellerShopView;

/// Product summary shown on a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CartProduct {
    pub seller: Option<SellerShopView>,
    pub name: String,
    pub slug: String,
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
}

/// An order item that is not yet bound to an order.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CartLine {
    #[serde(skip)]
    pub id: Uuid,
    #[serde(skip)]
    pub product_id: Uuid,
    pub product: CartProduct,
    pub quantity: i32,
    #[schema(value_type = String, example = "39.98")]
    pub total: Decimal,
}

impl CartLine {
    pub fn new(id: Uuid, product_id: Uuid, product: CartProduct, quantity: i32) -> Self {
        let total = line_total(product.price, quantity);
        Self {
            id,
            product_id,
            product,
            quantity,
            total,
        }
    }
}

/// Price times quantity. Never stored; always derived from the current price.
pub fn line_total(price: Decimal, quantity: i32) -> Decimal {
    price * Decimal::from(quantity)
}

/// What a cart toggle did to the caller's line for that product.
#[derive(Debug, Clone, PartialEq)]
pub enum CartOutcome {
    Added(CartLine),
    Updated(CartLine),
    Removed,
}

impl CartOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            CartOutcome::Added(_) => "Item Added To Cart",
            CartOutcome::Updated(_) => "Item Updated In Cart",
            CartOutcome::Removed => "Item Removed From Cart",
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, CartOutcome::Added(_))
    }

    pub fn into_item(self) -> Option<CartLine> {
        match self {
            CartOutcome::Added(line) | CartOutcome::Updated(line) => Some(line),
            CartOutcome::Removed => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::line;
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn total_is_price_times_quantity() {
        assert_eq!(line("Lamp", dec!(19.99), 3).total, dec!(59.97));
        assert_eq!(line("Lamp", dec!(19.99), 0).total, dec!(0));
    }

    #[test]
    fn removal_carries_no_item() {
        let outcome = CartOutcome::Removed;

        assert_eq!(outcome.message(), "Item Removed From Cart");
        assert!(!outcome.is_created());
        assert!(outcome.into_item().is_none());
    }

    #[test]
    fn added_line_is_created() {
        let outcome = CartOutcome::Added(line("Lamp", dec!(1), 1));

        assert!(outcome.is_created());
        assert_eq!(outcome.message(), "Item Added To Cart");
    }
}
