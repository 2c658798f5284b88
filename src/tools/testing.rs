//! Test utilities for tools module.
