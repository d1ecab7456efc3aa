//! Guest-pass user accounts and JWT claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User row joined with the executive profile, fetched at login
#[derive(Debug, Clone, FromRow)]
pub struct UserWithExecutive {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub department: Option<String>,
    pub password_hash: Option<String>,
    pub is_active: bool,
    pub failed_login_attempts: i32,
    pub account_locked_until: Option<DateTime<Utc>>,
    pub executive_id: Option<Uuid>,
    pub position: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public view of the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub executive_id: Option<Uuid>,
    pub position: Option<String>,
}

/// Login response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

/// JWT claims for authenticated guest-pass users
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserClaims {
    /// User email
    pub sub: String,
    pub user_id: Uuid,
    pub name: String,
    pub role: String,
    pub executive_id: Option<Uuid>,
    pub position: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn user_info(&self) -> UserInfo {
        UserInfo {
            id: self.user_id,
            email: self.sub.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            executive_id: self.executive_id,
            position: self.position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> UserClaims {
        let now = Utc::now().timestamp();
        UserClaims {
            sub: "front.desk@grandcity.example".to_string(),
            user_id: Uuid::new_v4(),
            name: "Front Desk".to_string(),
            role: "reception".to_string(),
            executive_id: None,
            position: None,
            exp: now + 3600,
            iat: now,
        }
    }

    #[test]
    fn token_round_trip() {
        let claims = claims();
        let token = claims.create_token("test-secret").unwrap();
        let decoded = UserClaims::from_token(&token, "test-secret").unwrap();
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.user_id, claims.user_id);
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let token = claims().create_token("test-secret").unwrap();
        assert!(UserClaims::from_token(&token, "other-secret").is_err());
    }
}
