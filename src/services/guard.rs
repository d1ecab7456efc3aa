//! Admin-password guard for destructive delete operations

use sha2::{Digest, Sha256};

use crate::error::{AppError, AppResult};

/// Shared-secret check gating property and maintenance-schedule deletion.
///
/// The expected SHA-256 digest comes from configuration. The comparison is
/// constant-time so the digest cannot be recovered byte by byte through
/// timing differences.
#[derive(Clone)]
pub struct AdminGuard {
    expected_digest: Vec<u8>,
}

impl AdminGuard {
    /// Build the guard from a hex-encoded SHA-256 digest
    pub fn new(password_hash_hex: &str) -> AppResult<Self> {
        let expected_digest = hex::decode(password_hash_hex)
            .map_err(|_| AppError::Internal("admin_password_hash is not valid hex".to_string()))?;
        if expected_digest.len() != Sha256::output_size() {
            return Err(AppError::Internal(
                "admin_password_hash is not a SHA-256 digest".to_string(),
            ));
        }
        Ok(Self { expected_digest })
    }

    /// Check a supplied password, returning 403 on mismatch or absence
    pub fn require(&self, password: Option<&str>) -> AppResult<()> {
        let password =
            password.ok_or_else(|| AppError::Forbidden("Invalid admin password".to_string()))?;
        if self.verify(password) {
            Ok(())
        } else {
            Err(AppError::Forbidden("Invalid admin password".to_string()))
        }
    }

    fn verify(&self, password: &str) -> bool {
        let digest = Sha256::digest(password.as_bytes());
        constant_time_eq(digest.as_slice(), &self.expected_digest)
    }
}

/// Byte-wise comparison that does not short-circuit on the first mismatch
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-256 of "admin123"
    const DIGEST: &str = "a665a45920422f9d417e4867efdc4fb8a04a1f3fff1fa07e998e86f7f7a27ae3";

    #[test]
    fn correct_password_passes() {
        let guard = AdminGuard::new(DIGEST).unwrap();
        assert!(guard.require(Some("admin123")).is_ok());
    }

    #[test]
    fn wrong_password_is_forbidden() {
        let guard = AdminGuard::new(DIGEST).unwrap();
        assert!(matches!(
            guard.require(Some("admin124")),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn missing_password_is_forbidden() {
        let guard = AdminGuard::new(DIGEST).unwrap();
        assert!(matches!(guard.require(None), Err(AppError::Forbidden(_))));
    }

    #[test]
    fn malformed_digest_is_rejected_at_build() {
        assert!(AdminGuard::new("zz").is_err());
        assert!(AdminGuard::new("abcd").is_err());
    }

    #[test]
    fn constant_time_eq_handles_length_mismatch() {
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"abc", b"abc"));
    }
}
