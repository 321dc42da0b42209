pub mod badge;
pub mod input;
pub mod select;

pub use badge::Badge;
pub use input::NumberInput;
pub use select::Select;
