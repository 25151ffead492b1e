//! Auth feature module: password login and registration, identity resolution,
//! the process-wide session and the route guards built on it. It touches the
//! bearer token and must never log token or password material.
//!
//! Flow Overview: the session starts by resolving any stored token through
//! `GET /users/me`. Login stores a fresh token and resolves it the same way.
//! A resolved user is routed to the admin or member shell by role, and the
//! shells render their content only once the session proves the requirement.

pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod identity;
pub(crate) mod policy;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::Guard;
