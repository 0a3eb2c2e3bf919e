//! Backends module - Filesystem and network integrations
//!
//! Provides:
//! - collect: Application name collection with walkdir
//! - iconify: Iconify search API client
//! - resolve: Icon matching and bounded lookup fan-out

pub mod collect;
pub mod iconify;
pub mod resolve;
