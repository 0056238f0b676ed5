//! Unified error system
//!
//! - [`ErrorCode`]: standardized error codes with HTTP status mapping
//! - [`AppError`]: error type carrying a code, message, and optional details
//!
//! Two kinds of failure cover the whole seating domain: invalid requests
//! (client-fixable input) and missing entities. Store infrastructure
//! failures map to a third, internal code. The kind distinction is what
//! a transport shell maps to response status codes.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::not_found("reservation 42 does not exist");
//! assert_eq!(err.code, ErrorCode::NotFound);
//! assert_eq!(err.http_status().as_u16(), 404);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
