pub mod clear;
pub mod config;
pub mod edit;
pub mod export;
pub mod get;
pub mod init;
pub mod list;
pub mod set;
pub mod show;
