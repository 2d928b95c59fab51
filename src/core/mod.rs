// checkledger - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, chrono, serde, csv.
// Must NOT depend on: app, platform, or the CLI surface.

pub mod checklist;
pub mod export;
pub mod model;
pub mod parser;
pub mod render;
