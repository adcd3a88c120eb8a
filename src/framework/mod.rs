pub mod builtin;
mod loader;
mod schema;
mod validation;

pub use loader::{framework_from_str, load_framework};
pub use schema::{
    Category, Framework, Question, ResponseDomain, ScaleOption, SelectOption, TierBand, SCALE_MAX,
};
pub use validation::validate_framework;
