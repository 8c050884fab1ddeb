//! Core translation engine module

pub mod config;
pub mod errors;
pub mod models;
pub mod rules;
pub mod translator;
