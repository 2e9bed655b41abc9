//! Common types and utilities for the csz C# compiler front end.
//!
//! This crate provides foundational types used across all csz crates:
//! - Source spans (`Span`) - half-open byte-offset intervals

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;
