pub mod add;
pub mod backup;
pub mod config;
pub mod day;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod members;
pub mod month;
pub mod session;
