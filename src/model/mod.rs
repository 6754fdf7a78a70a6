pub mod course_data;
pub mod score;
pub mod types;

pub use course_data::*;
pub use score::*;
pub use types::*;
