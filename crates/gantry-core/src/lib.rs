//! Gantry Core Types and Definitions
//!
//! This crate provides the foundational types for Gantry architecture
//! diagrams. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Categories**: Icon/category tags for diagram nodes ([`category::Category`])
//! - **Styles**: Edge styling definitions ([`style`] module)
//! - **Direction**: Flow direction of the rendered diagram ([`direction::Direction`])

pub mod category;
pub mod direction;
pub mod identifier;
pub mod style;
