mod command;
pub mod shopping;

pub use command::*;
