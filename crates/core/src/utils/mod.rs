//! Shared helpers.

pub mod decimal_utils;
