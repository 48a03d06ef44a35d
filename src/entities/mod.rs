pub mod discount;
pub mod order;
pub mod order_line;
pub mod product;
pub mod section;

pub use order::OrderStatus;
