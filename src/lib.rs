// Main library entry point for depscan.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
