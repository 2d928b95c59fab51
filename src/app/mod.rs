// checkledger - app/mod.rs
//
// Application layer: persistence and the audit-trail writer.
// Bridges core logic to the filesystem; no CLI concerns.

pub mod audit;
pub mod store;
