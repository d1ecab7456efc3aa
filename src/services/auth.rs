//! Authentication service for the guest-pass API

use argon2::{
    password_hash::PasswordHash, Argon2, PasswordVerifier,
};
use chrono::{Duration, Utc};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{LoginResponse, UserClaims, UserInfo, UserWithExecutive},
    repository::Repository,
};

/// Failed attempts before the account is locked
const MAX_FAILED_ATTEMPTS: i32 = 5;
/// Lock duration after too many failed attempts
const LOCKOUT_MINUTES: i64 = 30;

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate a user by email and password and issue a JWT.
    ///
    /// Wrong passwords count toward a lockout: after five failures the
    /// account is locked for thirty minutes. A successful login resets the
    /// counters and stamps last_login_at.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let user = self
            .repository
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !user.is_active {
            return Err(AppError::Forbidden("Account is disabled".to_string()));
        }

        if let Some(locked_until) = user.account_locked_until {
            if locked_until > Utc::now() {
                return Err(AppError::Forbidden(format!(
                    "Account is locked until {}. Please try again later.",
                    locked_until.to_rfc3339()
                )));
            }
        }

        let hash = user
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::Authentication("Password not set for this account".to_string()))?;

        if !verify_password(password, hash) {
            return self.handle_failed_attempt(&user).await;
        }

        self.repository.users.record_successful_login(user.id).await?;

        let claims = self.claims_for(&user);
        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok(LoginResponse {
            success: true,
            token,
            user: UserInfo {
                id: user.id,
                email: user.email,
                name: user.full_name,
                role: user.role,
                executive_id: user.executive_id,
                position: user.position,
            },
        })
    }

    async fn handle_failed_attempt(&self, user: &UserWithExecutive) -> AppResult<LoginResponse> {
        let attempts = user.failed_login_attempts + 1;

        if attempts >= MAX_FAILED_ATTEMPTS {
            let locked_until = Utc::now() + Duration::minutes(LOCKOUT_MINUTES);
            self.repository
                .users
                .record_failed_login(user.id, attempts, Some(locked_until))
                .await?;
            return Err(AppError::Forbidden(
                "Account locked due to multiple failed login attempts".to_string(),
            ));
        }

        self.repository
            .users
            .record_failed_login(user.id, attempts, None)
            .await?;
        Err(AppError::Authentication(format!(
            "Invalid email or password ({} attempts remaining)",
            MAX_FAILED_ATTEMPTS - attempts
        )))
    }

    fn claims_for(&self, user: &UserWithExecutive) -> UserClaims {
        let now = Utc::now();
        UserClaims {
            sub: user.email.clone(),
            user_id: user.id,
            name: user.full_name.clone(),
            role: user.role.clone(),
            executive_id: user.executive_id,
            position: user.position.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.config.jwt_expiration_hours)).timestamp(),
        }
    }
}

/// Verify a password against a stored argon2 hash. Malformed hashes are
/// treated as a mismatch rather than an error surfaced to the caller.
fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn correct_password_verifies() {
        let hashed = hash("visitor-desk-1");
        assert!(verify_password("visitor-desk-1", &hashed));
    }

    #[test]
    fn wrong_password_fails() {
        let hashed = hash("visitor-desk-1");
        assert!(!verify_password("visitor-desk-2", &hashed));
    }

    #[test]
    fn malformed_hash_fails_closed() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
