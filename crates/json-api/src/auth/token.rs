//! Admin token.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use sha2::{Digest, Sha256};

/// The configured admin secret, kept only as its SHA-256 digest.
#[derive(Clone)]
pub(crate) struct AdminToken {
    digest: [u8; 32],
}

impl AdminToken {
    pub(crate) fn new(secret: &str) -> Self {
        Self {
            digest: hash_token(secret),
        }
    }

    /// Compare a presented token against the configured one without
    /// short-circuiting on the first differing byte.
    pub(crate) fn matches(&self, presented: &str) -> bool {
        hash_token(presented)
            .iter()
            .zip(self.digest.iter())
            .fold(0_u8, |diff, (a, b)| diff | (a ^ b))
            == 0
    }
}

impl Debug for AdminToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("AdminToken(..)")
    }
}

fn hash_token(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_only_the_configured_token() {
        let token = AdminToken::new("s3cret");

        assert!(token.matches("s3cret"));
        assert!(!token.matches("s3cret "));
        assert!(!token.matches(""));
    }

    #[test]
    fn debug_does_not_leak_digest() {
        assert_eq!(format!("{:?}", AdminToken::new("s3cret")), "AdminToken(..)");
    }
}
