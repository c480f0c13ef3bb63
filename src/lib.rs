pub mod alchemy;
pub mod config;
pub mod errors;
pub mod holders;
pub mod logger;
pub mod telegram;
pub mod utils;
pub mod webserver;
