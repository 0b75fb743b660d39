pub(crate) mod discount;

pub use discount::{DiscountCollection, DiscountRecord};
