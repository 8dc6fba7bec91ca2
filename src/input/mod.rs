//! Input adapters for the curlicue explorer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into controller notifications.

#[cfg(feature = "gui")]
pub mod gui;
