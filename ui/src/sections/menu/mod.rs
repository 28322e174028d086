pub mod catalog;
pub mod filter;
pub mod view;

pub use catalog::{catalog, parse_catalog, MenuItem};
pub use filter::{categories, Category, MenuFilter};
pub use view::MenuSection;
