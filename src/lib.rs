pub mod config;
pub mod domain;
pub mod headless;
pub mod infrastructure;
pub mod scan;
pub mod service;
pub mod tui;
