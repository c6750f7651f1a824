//! Admin token check.
//!
//! A single process-wide shared secret gates every mutating API call.
//! Comparison uses `subtle::ConstantTimeEq` so the check does not leak
//! match length through timing. Known remaining gaps, accepted for a
//! single-admin dashboard: no rate limiting, and the token is also
//! accepted via a query parameter (which ends up in access logs).

use subtle::ConstantTimeEq;

/// The process-wide admin secret.
///
/// Never printed by `Debug`; use [`AdminToken::reveal`] for the one startup
/// log line when the token was generated rather than configured.
#[derive(Clone)]
pub struct AdminToken(String);

impl AdminToken {
    /// Wrap a configured secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Generate a random token (UUID v4 — 128 bits of OS CSPRNG randomness).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Constant-time comparison of a caller-supplied candidate against the
    /// secret. Length mismatch short-circuits inside `ct_eq`.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        self.0.as_bytes().ct_eq(candidate.as_bytes()).into()
    }

    /// The plaintext secret. Only for the startup log of a generated token.
    #[must_use]
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminToken").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_accepts_exact_match() {
        let token = AdminToken::new("hunter2");
        assert!(token.verify("hunter2"));
    }

    #[test]
    fn verify_rejects_mismatch() {
        let token = AdminToken::new("hunter2");
        assert!(!token.verify("hunter3"));
        assert!(!token.verify(""));
        assert!(!token.verify("hunter22"));
    }

    #[test]
    fn generated_tokens_differ() {
        let a = AdminToken::generate();
        let b = AdminToken::generate();
        assert!(!a.verify(b.reveal()));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let token = AdminToken::new("very-secret");
        assert!(!format!("{token:?}").contains("very-secret"));
    }
}
