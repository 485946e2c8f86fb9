#![allow(clippy::too_many_arguments)]

pub mod admin;
pub mod connection_settings;
pub mod consumer;
pub mod error;
pub mod queries;
