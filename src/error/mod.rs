mod app_error;

pub use app_error::{AppError, CONNECTION_FAILED};

pub type Result<T> = std::result::Result<T, AppError>;
