//! Traits that plug outside code into [`Outcome`](crate::Outcome).
//!
//! - [`TryParse`] / [`TryCreate`]: constructor contracts for value objects
//! - [`OutcomeExt`]: conversion of `Result` into [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{OutcomeExt, TryCreate};
//! use outcome_rail::{Error, Outcome};
//!
//! struct Port(u16);
//!
//! impl TryCreate<u32> for Port {
//!     fn try_create(value: u32) -> Outcome<Self> {
//!         u16::try_from(value)
//!             .map(Port)
//!             .map_err(|_| Error::new("port out of range").with("value", value))
//!             .into_outcome()
//!     }
//! }
//!
//! assert!(Port::try_create(8080).is_success());
//! assert!(Port::try_create(70_000).is_failure());
//! ```

pub mod outcome_ext;
pub mod value_object;

pub use outcome_ext::OutcomeExt;
pub use value_object::{parse_delimited, TryCreate, TryParse};
