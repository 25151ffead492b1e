//! Client wrappers for the auth endpoints. Passwords pass through here on the
//! way to the API and must never be logged.

use crate::app_lib::{
    ApiClient, AppError, Method,
    api::{Body, Recovery},
};
use crate::features::auth::types::{LoginForm, MessageResponse, RegisterRequest, TokenResponse};

const MIN_PASSWORD_CHARS: usize = 8;

/// Exchanges email and password for a bearer token (`POST /auth/token`, OAuth2
/// form fields). A wrong password is a 401, which is the login page's business,
/// so global recovery is disabled for this call.
pub async fn login_with_password(client: &ApiClient, form: &LoginForm) -> Result<String, AppError> {
    let email = form.email.trim();
    if email.is_empty() || form.password.trim().is_empty() {
        return Err(AppError::Config(
            "Email and password are required.".to_string(),
        ));
    }

    let body = Body::form([("username", email), ("password", form.password.as_str())]);
    let response = client
        .request_with(Method::Post, "/auth/token", Some(body), Recovery::Local)
        .await
        .map_err(explain_login_failure)?;

    let token: TokenResponse = response.json()?;
    Ok(token.access_token)
}

/// Creates an account and returns the server's confirmation message.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<String, AppError> {
    if request.name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(AppError::Config("Name and email are required.".to_string()));
    }
    if request.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::Config(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters."
        )));
    }

    let response: MessageResponse = client
        .send_json(Method::Post, "/auth/register", request)
        .await?;
    Ok(response.msg)
}

fn explain_login_failure(err: AppError) -> AppError {
    let message = match err.status() {
        Some(401) => "Incorrect password.",
        Some(403) => "Account not verified. Please check your email.",
        Some(404) => "Email not found. Please register.",
        _ => return err,
    };

    AppError::Http {
        status: err.status().unwrap_or_default(),
        message: message.to_string(),
    }
}
