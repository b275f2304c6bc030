//! Test-run launcher: command assembly and child invocation

pub mod command;
pub mod spawn;

pub use command::{MODE_FLAG, TestCommand, UNBUFFERED_VAR};
pub use spawn::run;
