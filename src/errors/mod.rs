//! Error types and error handling for the front end.
//!
//! This module defines the errors each stage can return. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for scanning, parsing and type checking
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
