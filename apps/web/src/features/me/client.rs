//! Client helpers for current-user endpoints.

use crate::{
    app_lib::{ApiClient, AppError, Method, api::Body},
    features::{
        auth::{session::SessionController, types::User},
        me::types::ProfileUpdate,
    },
};

/// Saves the profile and refreshes the session so every view shows the edit.
pub async fn update_profile(
    client: &ApiClient,
    session: &SessionController,
    update: &ProfileUpdate,
) -> Result<User, AppError> {
    let name = update.name.trim();
    if name.is_empty() {
        return Err(AppError::Config("Name is required.".to_string()));
    }

    let user: User = client
        .request(Method::Put, "/users/me", Some(Body::form([("name", name)])))
        .await?
        .json()?;

    session.refetch().await;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::update_profile;
    use crate::app_lib::{AppError, api::ApiResponse, paths, storage::TokenStore};
    use crate::features::{
        auth::session::{Phase, SessionController},
        me::types::ProfileUpdate,
    };
    use crate::test_support::{Fixture, member_json};

    fn renamed(name: &str) -> String {
        serde_json::json!({
            "id": "m1", "name": name, "email": "m1@example.test", "role": "member"
        })
        .to_string()
    }

    #[tokio::test]
    async fn update_refreshes_the_session() {
        let fixture = Fixture::at(paths::MEMBER_SETTINGS);
        fixture.tokens.write("tok");
        fixture
            .transport
            .push(Ok(ApiResponse::new(200, member_json("m1", "member"))));
        let session = SessionController::new(fixture.client.clone());
        session.start().await;
        fixture
            .transport
            .push(Ok(ApiResponse::new(200, renamed("Ada Lovelace"))));
        fixture
            .transport
            .push(Ok(ApiResponse::new(200, renamed("Ada Lovelace"))));

        let user = update_profile(
            &fixture.client,
            &session,
            &ProfileUpdate {
                name: " Ada Lovelace ".to_string(),
            },
        )
        .await
        .expect("saved");

        assert_eq!(user.name, "Ada Lovelace");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::Resolved);
        assert_eq!(
            snapshot.user.map(|user| user.name),
            Some("Ada Lovelace".to_string())
        );
        assert_eq!(fixture.transport.request_count(), 3);
        assert_eq!(
            fixture.transport.requests()[1].body,
            Some(crate::app_lib::api::Body::Form("name=Ada+Lovelace".to_string()))
        );
    }

    #[tokio::test]
    async fn blank_name_is_rejected_locally() {
        let fixture = Fixture::at(paths::MEMBER_SETTINGS);
        let session = SessionController::new(fixture.client.clone());

        let result = update_profile(&fixture.client, &session, &ProfileUpdate::default()).await;

        assert!(matches!(result, Err(AppError::Config(_))));
        assert_eq!(fixture.transport.request_count(), 0);
    }
}
