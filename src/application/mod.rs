/// Session and login cookie handling
pub mod auth;
/// Client facade bundling transport and services
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Service implementations
pub mod services;
