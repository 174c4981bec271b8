pub mod cli;
pub mod cmd;
pub mod dispatch;
pub mod emit;
pub mod fill;
pub mod find_paths;
pub mod header;
pub mod logging;
pub mod region;
pub mod session;
pub mod styles;
pub mod types;
