use bcrypt::{hash, verify, DEFAULT_COST};
use tracing::{error, warn};

// bcrypt ignores everything past 72 bytes; truncate explicitly so the
// behavior is the same on every backend.
const BCRYPT_MAX_BYTES: usize = 72;

fn truncated(plain: &str) -> &[u8] {
    let bytes = plain.as_bytes();
    &bytes[..bytes.len().min(BCRYPT_MAX_BYTES)]
}

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let hashed = hash(truncated(plain), DEFAULT_COST).map_err(|e| {
        error!(error = %e, "bcrypt hash error");
        anyhow::anyhow!(e)
    })?;
    Ok(hashed)
}

/// A malformed stored hash yields `false`, never an error to the caller.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    match verify(truncated(plain), hashed) {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "bcrypt verify failed on stored hash");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "Secur3P@ssw0rd!";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(verify_password(password, &hash));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &hash));
    }

    #[test]
    fn verify_is_false_on_malformed_hash() {
        assert!(!verify_password("anything", "not-a-valid-hash"));
    }

    #[test]
    fn input_is_truncated_to_72_bytes() {
        let long: String = "a".repeat(100);
        let hash = hash_password(&long).expect("hashing should succeed");
        // Same 72-byte prefix, different tail: still verifies.
        let mut other = "a".repeat(72);
        other.push_str(&"b".repeat(28));
        assert!(verify_password(&other, &hash));
        // Different byte inside the first 72: rejected.
        let mut different = "a".repeat(71);
        different.push('c');
        assert!(!verify_password(&different, &hash));
    }
}
