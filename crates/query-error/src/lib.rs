//! # query-error
//!
//! Numerically coded errors for every subsystem of the query service.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: one variant per distinct failure, each with a stable code and dotted key
//! - **Band**: codes are partitioned into numeric ranges, one per subsystem
//! - **Caller**: every error records the `file:line` that constructed it
//! - **Source**: an underlying error can be wrapped without being copied or mutated
//!
//! ## Usage
//!
//! ```rust
//! use query_error::{Band, Error};
//!
//! fn lookup(node: &str) -> query_error::Result<()> {
//!     Err(Error::admin_no_such_node(node))
//! }
//!
//! let err = lookup("node-7").unwrap_err();
//! assert_eq!(err.code(), 2080);
//! assert_eq!(err.key(), "admin.clustering.no_such_node");
//! assert_eq!(err.band(), Band::Admin);
//! ```
//!
//! ## Principles
//!
//! - Codes are never reused; new kinds get new codes
//! - Constructors never fail
//! - Transport encoding (HTTP status, JSON, log lines) is the caller's concern

mod band;
mod caller;
mod constructors;
mod error;
mod kind;
mod level;
pub mod registry;
mod render;

pub use band::Band;
pub use caller::{Caller, caller, caller_n};
pub use error::{BoxError, Causes, Error};
pub use kind::ErrorKind;
pub use level::ErrorLevel;
pub use registry::ErrorDescriptor;
pub use render::render;

/// Result type alias using the query Error
pub type Result<T> = std::result::Result<T, Error>;
