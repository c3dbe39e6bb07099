pub mod config;
pub mod extract;
pub mod find;
pub mod helper;
pub mod init;
pub mod keys;
pub mod lookup;
