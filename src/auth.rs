//! Session gate
//!
//! Mints and verifies the signed session token that guards the dashboard
//! routes. Credentials are the demonstration pair; the password is compared
//! as a SHA-256 digest rather than plaintext.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;
use uuid::Uuid;

use crate::api::ApiState;
use crate::error::DashboardError;
use crate::Result;

const ADMIN_USERNAME: &str = "admin";
// SHA-256("admin123")
const ADMIN_PASSWORD_DIGEST: &str =
    "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9";

const TOKEN_TTL_HOURS: i64 = 24;

//
// ================= Claims =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub jti: Uuid,
    pub exp: usize,
}

/// Verified claims attached to the request by the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthSession(pub Claims);

//
// ================= Auth Service =================
//

pub struct AuthService {
    secret: String,
}

impl AuthService {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Checks the credential pair and mints a session token on success.
    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        if username != ADMIN_USERNAME || !password_matches(password) {
            return Err(DashboardError::InvalidCredentials);
        }
        self.mint_token(username, "admin")
    }

    fn mint_token(&self, username: &str, role: &str) -> Result<String> {
        let expires_at = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);
        let claims = Claims {
            sub: username.to_string(),
            role: role.to_string(),
            jti: Uuid::new_v4(),
            exp: expires_at.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Decodes and validates a session token, including expiry.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

fn password_matches(candidate: &str) -> bool {
    let digest = Sha256::digest(candidate.as_bytes());
    hex::encode(digest) == ADMIN_PASSWORD_DIGEST
}

//
// ================= Middleware =================
//

/// Bearer-token gate for the dashboard routes: missing token → 401,
/// invalid or expired token → 403. Verified claims are attached as a
/// request extension.
pub async fn require_auth(
    State(state): State<ApiState>,
    mut req: Request,
    next: Next,
) -> std::result::Result<Response, StatusCode> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let Some(token) = token else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    match state.auth.verify_token(token) {
        Ok(claims) => {
            req.extensions_mut().insert(AuthSession(claims));
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!("Rejected session token: {}", e);
            Err(StatusCode::FORBIDDEN)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("test-secret".to_string())
    }

    #[test]
    fn test_login_round_trip() {
        let auth = service();
        let token = auth.login("admin", "admin123").unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let auth = service();
        assert!(matches!(
            auth.login("admin", "wrong"),
            Err(DashboardError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("root", "admin123"),
            Err(DashboardError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_rejects_garbage_token() {
        let auth = service();
        assert!(auth.verify_token("not-a-token").is_err());
    }

    #[test]
    fn test_verify_rejects_token_from_other_secret() {
        let token = AuthService::new("other-secret".to_string())
            .login("admin", "admin123")
            .unwrap();
        assert!(service().verify_token(&token).is_err());
    }
}
