pub mod app_config;
pub mod error;
pub mod peek_api;
pub mod startup;
mod time_util;
