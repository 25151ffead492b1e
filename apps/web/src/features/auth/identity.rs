//! Identity Resolver: the single source of truth for "who is the current user".
//! It exchanges the stored bearer token for a profile via `GET /users/me`.

use crate::app_lib::{ApiClient, AppError, Method, api::Recovery};
use crate::features::auth::types::User;
use thiserror::Error;

const ME_PATH: &str = "/users/me";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// Fast path: nothing to resolve, no request was made.
    #[error("no token stored")]
    NoToken,
    #[error("token rejected by the server")]
    Unauthorized,
    #[error("identity request failed: {0}")]
    Network(String),
    #[error("unexpected identity response: {0}")]
    Malformed(String),
    #[error("identity request failed with status {status}")]
    Server { status: u16 },
}

#[derive(Clone)]
pub struct IdentityResolver {
    client: ApiClient,
}

impl IdentityResolver {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Resolves the stored token to a user.
    ///
    /// 401s are handled by the session controller, so the request opts out of
    /// the client's global recovery.
    pub async fn resolve(&self) -> Result<User, IdentityError> {
        if self.client.tokens().read().is_none() {
            return Err(IdentityError::NoToken);
        }

        let response = self
            .client
            .request_with(Method::Get, ME_PATH, None, Recovery::Local)
            .await
            .map_err(IdentityError::from)?;

        response
            .json::<User>()
            .map_err(|err| IdentityError::Malformed(err.to_string()))
    }
}

impl From<AppError> for IdentityError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Http {
                status: 401 | 403, ..
            } => IdentityError::Unauthorized,
            AppError::Http { status, .. } => IdentityError::Server { status },
            AppError::Parse(message) => IdentityError::Malformed(message),
            AppError::Network(message)
            | AppError::Timeout(message)
            | AppError::Config(message)
            | AppError::Serialization(message) => IdentityError::Network(message),
        }
    }
}
