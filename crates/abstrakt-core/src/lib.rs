//! Abstrakt Core Types and Definitions
//!
//! This crate provides the foundational types shared by every stage of the
//! Abstrakt pipeline. It includes:
//!
//! - **Identifiers**: Owned, hashable identifiers ([`identifier::Id`])
//! - **Semantic**: The constellation model produced by the loader
//!   ([`semantic`] module)

pub mod identifier;
pub mod semantic;
