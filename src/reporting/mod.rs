//! Diagnostics
//!
//! This module holds structured logging for configuration, dispatch
//! progress and per-probe outcomes.

pub mod logging;
