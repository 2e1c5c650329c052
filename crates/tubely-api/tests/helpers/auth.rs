use chrono::Duration;
use tubely_api::auth::JwtService;
use uuid::Uuid;

/// Valid one-hour access token for `user_id`.
pub fn token_for(jwt: &JwtService, user_id: Uuid) -> String {
    jwt.issue_access_token(user_id, Duration::hours(1))
        .expect("Failed to issue token")
}

pub fn expired_token_for(jwt: &JwtService, user_id: Uuid) -> String {
    jwt.issue_access_token(user_id, Duration::minutes(-5))
        .expect("Failed to issue token")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
