//! Identity and auth payloads. `LoginForm` carries a password and
//! `TokenResponse` a bearer token, so neither may ever be logged.

use serde::{Deserialize, Serialize};

/// Membership role. The only attribute consulted for navigation gating.
///
/// Roles the client does not know about deserialize as [`Role::Unknown`] and get
/// the least privileged treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Mentor,
    Member,
    Alumni,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn is_admin(self) -> bool {
        match self {
            Role::Admin => true,
            Role::Mentor | Role::Member | Role::Alumni | Role::Unknown => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Mentor => "Mentor",
            Role::Member => "Member",
            Role::Alumni => "Alumni",
            Role::Unknown => "Guest",
        }
    }
}

/// Profile returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default)]
    pub about_me: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

fn default_role() -> Role {
    Role::Member
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Plain `{"msg": "..."}` acknowledgement.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}
