//! Core library for bfhl
//!
//! This crate implements the **Functional Core** of the bfhl service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`bfhl_core`** (this crate): Pure transformation functions with zero I/O
//! - **`bfhl`**: HTTP server, configuration and logging (the Imperative Shell)
//!
//! Every function here is deterministic and free of side effects, so the whole
//! crate is tested with plain fixture data.
//!
//! # Module Organization
//!
//! - [`input`]: Decoding of the request body into tokens
//! - [`classify`]: Sorting tokens into even, odd, alphabetic and special buckets
//! - [`transform`]: The reversed, alternating-case concat string
//!
//! # Example Usage
//!
//! ```rust
//! use bfhl_core::{classify::classify, transform::transform};
//!
//! let result = classify(&["a", "1", "334", "4", "R", "$"]);
//! assert_eq!(result.sum, "339");
//! assert_eq!(transform(&result.alphabets), "Ra");
//! ```

pub mod classify;
pub mod input;
pub mod transform;
