mod attendance;
mod auth;
pub mod client;
mod content;
mod employees;
mod links;
pub mod types;

pub use client::*;
pub use types::*;
