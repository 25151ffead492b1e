//! Types for `/users/me` updates.

/// Editable profile fields. The picture upload needs multipart and is not
/// offered from this client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
}
