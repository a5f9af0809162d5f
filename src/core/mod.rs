pub mod cookbook;
pub mod entry;
pub mod registry;
pub mod summary;

pub use crate::domain::model::{Entry, Ingredient, Recipe, RecipeSummary, RequiredItem};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
