//! Subcommand modules for the `lcsq` binary.

pub mod matrix;
pub mod pair;
