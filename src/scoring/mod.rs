pub mod engine;
pub mod error;
pub mod response;

pub use engine::{score, CategoryScore, ScoreResult};
pub use error::InvalidInput;
pub use response::{ResponseSet, ResponseValue};
