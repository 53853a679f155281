//! Command handlers for shopcode CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod codec;
pub mod configure;
pub mod decode;
pub mod helpers;
pub mod items;
pub mod process;
