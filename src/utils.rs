//! Miscellaneous utility modules for lsr.
//!
//! - [cli]: command-line flag parsing plus the help and version text.
//! - [users]: owner and group name lookups in the system databases.

pub mod cli;
pub mod users;

pub use cli::{CliAction, handle_args};
pub use users::{group_name, user_name};
