//! Linkmark — client-side bookmark manager core.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod controller;
pub mod managers;
pub mod services;
pub mod types;
