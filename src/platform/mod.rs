// checkledger - platform/mod.rs
//
// Platform abstraction layer: directory resolution and config loading.
// Dependencies: standard library, directories, toml.
// Must NOT depend on: core, app.

pub mod config;
