pub mod arith;
pub mod entry;
pub mod globals;
pub mod report;
