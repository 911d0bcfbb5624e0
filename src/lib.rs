//! Ferrocat - a small HTTP/1.1 server with cookie sessions
//!
//! Core library: request parsing, routing, controllers, sessions and
//! response serialization.

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod resource;
pub mod routing;
pub mod server;
pub mod session;
pub mod user;
