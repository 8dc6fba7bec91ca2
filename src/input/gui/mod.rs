//! GUI input adapter for interactive curlicue exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the parameter controls.

pub mod app;
pub mod commands;
