//! Current-user profile editing.

pub(crate) mod client;
pub(crate) mod types;
