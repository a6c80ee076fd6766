//! Consulta de descritivo de função
//!
//! Command-line front end for the job-function lookup engine: loads a base
//! (CSV, spreadsheet or the built-in sample), runs lookups and renders or
//! exports the results.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod render;
pub mod sample;
pub mod session;
