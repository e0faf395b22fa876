//! Concur API 連携モジュール

mod auth;
mod client;

pub use auth::ClientCredentials;
pub use client::{AuthState, ConcurClient, DEFAULT_BASE_URL};
