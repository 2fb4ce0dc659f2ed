// crates/core/src/lib.rs
pub mod analytics;
pub mod clock;
pub mod error;
pub mod paths;
pub mod source;
pub mod types;

pub use analytics::build_chart_data;
pub use clock::*;
pub use error::*;
pub use source::*;
pub use types::*;
