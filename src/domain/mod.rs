pub mod error;
pub mod export;
pub mod sweeper_config;
pub mod table;
pub mod upload;
