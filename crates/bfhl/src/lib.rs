//! Imperative shell for the bfhl service: configuration, logging and the
//! axum server wrapped around [`bfhl_core`].

pub mod cli;
pub mod error;
pub mod handlers;
pub mod prelude;
pub mod response;
pub mod server;
