//! UXPM Asset Tools Library
//!
//! This library provides core functionality for the UXPM asset CLI,
//! including free-text search over the reference asset tree, the JSON
//! theme token store, component spec loading, and the CSV palette importer.

// Module declarations
pub mod cli;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
