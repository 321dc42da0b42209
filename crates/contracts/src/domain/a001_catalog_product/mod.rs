pub mod aggregate;
pub mod filter;

pub use aggregate::{Product, ProductId};
pub use filter::{FilterChange, FilterState, CATEGORIES, COMPANIES};
