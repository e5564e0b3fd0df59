//! Samarth command-line front end.
//!
//! Library half of the `samarth` binary: configuration loading, argument
//! parsing and answer rendering, kept here so they can be tested without
//! spawning the process.

pub mod args;
pub mod config;
pub mod output;
