//! Rollcall Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Rollcall engines
//! and renderers. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Layered SVG output and text styling ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
