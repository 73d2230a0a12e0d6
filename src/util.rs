pub mod context;
pub mod helper;
