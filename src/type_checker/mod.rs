//! Type checking and semantic analysis module.
//!
//! A single forward pass over the AST that:
//!
//! - Resolves declared type names to primitive types
//! - Builds function signatures from parameter and return types
//! - Records the resolved object of every declared identifier
//!
//! The resulting [`Info`](info::Info) is keyed by identifier identity and
//! has no notion of scope.

pub mod info;
pub mod type_checker;
pub mod types;
