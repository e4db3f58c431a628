pub mod clear;
mod command_result;
pub mod context;
pub mod init;
pub mod replay;
pub mod report;
pub mod scan;

pub use command_result::*;
