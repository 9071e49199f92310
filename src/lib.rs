//! Birthday Releases - K-Pop albums and movies released on a calendar day
//!
//! Searches a music catalog and a movie catalog across past years, keeps
//! the releases matching a month/day and memoizes each lookup.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod finder;
pub mod models;
pub mod presenter;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use service::ReleaseService;
