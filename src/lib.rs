//! gitgod: a curated directory of open-source projects.
//!
//! The library holds the catalog, ranked search, and the cached trending
//! feed; the `gitgod` binary puts a CLI and a terminal UI on top.

pub mod app;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod search;
pub mod stars;
pub mod state;
pub mod trending;
pub mod ui;
