//! Guest-pass user accounts repository

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{error::AppResult, models::user::UserWithExecutive};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Look up a user by email (lowercased), joined with any executive profile
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<UserWithExecutive>> {
        let row = sqlx::query_as::<_, UserWithExecutive>(
            r#"
            SELECT u.id, u.email, u.full_name, u.role, u.department, u.password_hash,
                   u.is_active, u.failed_login_attempts, u.account_locked_until,
                   e.id as executive_id, e.position
            FROM users u
            LEFT JOIN executives e ON u.id = e.user_id
            WHERE u.email = $1
            "#,
        )
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Record a failed login attempt, optionally locking the account
    pub async fn record_failed_login(
        &self,
        id: Uuid,
        attempts: i32,
        locked_until: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET failed_login_attempts = $1, account_locked_until = $2, updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(attempts)
        .bind(locked_until)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Reset lockout counters and stamp last login on success
    pub async fn record_successful_login(&self, id: Uuid) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET failed_login_attempts = 0,
                account_locked_until = NULL,
                last_login_at = NOW(),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
