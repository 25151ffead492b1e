//! Domain-level frontend features. Session handling and route gating live in
//! `auth`; profile editing for the signed-in user lives in `me`. Routes import
//! these so view code stays focused on markup.

pub(crate) mod auth;
pub(crate) mod me;
