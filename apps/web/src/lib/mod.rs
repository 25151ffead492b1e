//! Shared frontend plumbing: configuration, the API client with its auth
//! interceptors, token persistence, navigation and logging.
//!
//! ## Session flow
//!
//! 1. **Startup:** the token store is read. No token means the visitor is
//!    anonymous and no request is made.
//! 2. **Resolution:** with a token, `GET /users/me` turns it into a user. The
//!    answer decides which shell (member or admin) the visitor lands in.
//! 3. **Rejection:** any 401 on a regular request clears the token and sends the
//!    browser to `/auth/login`.
//!
//! These utilities handle the bearer token directly; callers must never log it.

pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;
pub(crate) mod navigation;
pub(crate) mod paths;
pub(crate) mod storage;

pub(crate) use api::{ApiClient, Method};
pub(crate) use errors::AppError;
