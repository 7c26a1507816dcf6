#![forbid(unsafe_code)]

//! Task daemon: HTTP API over a SQLite task table.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod memory;
pub mod service;
