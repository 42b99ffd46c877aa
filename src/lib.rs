//! Demonstration banking flow engine.
//!
//! Validates deposit/withdraw form input, applies optimistic balance
//! mutations to the active session, and synchronizes each transaction to a
//! remote account store over HTTP in the background. The rendering surface
//! (the CLI in `main.rs`, or anything else) owns the session, drives the
//! flow controllers and renders the state they expose.

pub mod api;
pub mod config;
pub mod flows;
pub mod models;
pub mod services;
