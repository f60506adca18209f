pub mod config;
pub mod date_utils;
pub mod error;
pub mod fixtures;
pub mod id_sequence;
pub mod list;
pub mod money;
pub mod notifications;
