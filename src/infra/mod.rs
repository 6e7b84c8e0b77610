//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-bound pieces: SQLite persistence and the on-disk config file.

pub mod app_config;
pub mod db;
