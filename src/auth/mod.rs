//! Authentication module
//!
//! Thin relay to the gnosis-auth service: bearer tokens go in, JWTs come
//! back. The client holds no mutable state besides its base URL, so a
//! single instance is safe to share across concurrent callers.

mod client;

pub use client::AuthClient;

#[cfg(test)]
mod tests;
