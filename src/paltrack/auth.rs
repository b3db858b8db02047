//! Credential gate.
//!
//! A single shared username/password pair guards the CLI. Only a SHA-256
//! digest of the password is stored; verification hashes the supplied
//! plaintext and compares hex digests. No throttling, no sessions.

use log::warn;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password_sha256: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            password_sha256: hash_password(password),
        }
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        let ok = username == self.username && hash_password(password) == self.password_sha256;
        if !ok {
            warn!("failed login attempt for user {:?}", username);
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_correct_credentials() {
        let creds = Credentials::new("admin", "1234");
        assert!(creds.verify("admin", "1234"));
        assert!(!creds.verify("admin", "12345"));
        assert!(!creds.verify("root", "1234"));
    }

    #[test]
    fn stores_a_digest_not_the_plaintext() {
        let creds = Credentials::new("admin", "1234");
        assert_ne!(creds.password_sha256, "1234");
        assert_eq!(
            creds.password_sha256,
            "03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4"
        );
    }
}
