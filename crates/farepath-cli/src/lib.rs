//! farepath CLI library.
//!
//! Output formatting shared by the `farepath-cli` subcommands.

pub mod output;
