//! Middleware module
//!
//! Request logging for the HTTP layer

pub mod logging;
