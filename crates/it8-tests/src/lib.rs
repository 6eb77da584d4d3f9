//! Integration tests for it8-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the document model, the CGATS table and the load/save layer.
