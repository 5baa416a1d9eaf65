pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod feed;
pub mod layout;
pub mod log;
pub mod render;
pub mod visibility;
