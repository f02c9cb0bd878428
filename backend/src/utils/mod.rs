pub mod error;
pub mod text;

pub use error::{ApiError, ApiErrorResponse, ApiResult, panic_response};
pub use text::truncate_chars;
