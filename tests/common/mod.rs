//! Common test utilities for cmapkit.

pub mod assertions;
pub mod image_utils;
