//! Workspace tooling package.
//!
//! Holds the rusty-hook pre-commit configuration; the code lives under `crates/`.
