pub mod order_items;
