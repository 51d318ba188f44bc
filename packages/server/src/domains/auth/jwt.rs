use anyhow::Result;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{AgentId, AuthError};

/// Default lifetime of an access token
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject (agent id as decimal string)
    pub exp: i64,    // Expiration timestamp
    pub iat: i64,    // Issued at timestamp
    pub iss: String, // Issuer
    pub jti: String, // JWT ID (unique token identifier)
}

impl Claims {
    /// Decode the subject claim into an agent id
    pub fn agent_id(&self) -> Result<AgentId, AuthError> {
        AgentId::parse(&self.sub).map_err(|_| AuthError::InvalidToken)
    }
}

/// JWT Service - creates and verifies access tokens
///
/// Built once at startup from the configured secret and shared read-only.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl: chrono::Duration,
}

impl JwtService {
    /// Create new JWT service with secret, issuer and token lifetime
    pub fn new(secret: &str, issuer: String, ttl: chrono::Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            ttl,
        }
    }

    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    /// Create a new access token for an agent
    pub fn create_token(&self, agent_id: AgentId) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + self.ttl;

        let claims = Claims {
            sub: agent_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(), // Unique token ID
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a JWT token
    ///
    /// Returns claims if the signature, issuer and expiry all check out.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }

    /// Verify a token and return the agent id it was issued for
    pub fn verify(&self, token: &str) -> Result<AgentId, AuthError> {
        let claims = self.verify_token(token).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AuthError::InvalidToken
        })?;
        claims.agent_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> JwtService {
        JwtService::new(
            secret,
            "test_issuer".to_string(),
            chrono::Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        )
    }

    #[test]
    fn test_create_and_verify_token() {
        let service = service("test_secret_key");
        let agent_id = AgentId::from_i64(17);

        let token = service.create_token(agent_id).unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "17");
        assert_eq!(claims.iss, "test_issuer");
        assert_eq!(service.verify(&token).unwrap(), agent_id);
    }

    #[test]
    fn test_invalid_token() {
        let service = service("test_secret_key");
        assert!(matches!(
            service.verify("invalid_token"),
            Err(AuthError::InvalidToken)
        ));
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = service("secret1");
        let service2 = service("secret2");

        let token = service1.create_token(AgentId::from_i64(1)).unwrap();

        // Token created with secret1 should not verify with secret2
        assert!(service2.verify_token(&token).is_err());
    }

    #[test]
    fn test_tampered_signature() {
        let service = service("test_secret_key");
        let token = service.create_token(AgentId::from_i64(1)).unwrap();

        let (unsigned, signature) = token.rsplit_once('.').unwrap();
        let mut chars: Vec<char> = signature.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{}.{}", unsigned, chars.into_iter().collect::<String>());

        assert!(matches!(
            service.verify(&tampered),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_swapped_payload_rejected() {
        let service = service("test_secret_key");
        let token_a = service.create_token(AgentId::from_i64(1)).unwrap();
        let token_b = service.create_token(AgentId::from_i64(2)).unwrap();

        let parts_a: Vec<&str> = token_a.split('.').collect();
        let parts_b: Vec<&str> = token_b.split('.').collect();
        let forged = format!("{}.{}.{}", parts_a[0], parts_b[1], parts_a[2]);

        assert!(service.verify(&forged).is_err());
    }

    #[test]
    fn test_expired_token() {
        let expired = JwtService::new(
            "test_secret_key",
            "test_issuer".to_string(),
            chrono::Duration::seconds(-60),
        );
        let token = expired.create_token(AgentId::from_i64(1)).unwrap();

        assert!(matches!(
            expired.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_issuer() {
        let other = JwtService::new(
            "test_secret_key",
            "other_issuer".to_string(),
            chrono::Duration::minutes(5),
        );
        let token = other.create_token(AgentId::from_i64(1)).unwrap();

        assert!(service("test_secret_key").verify(&token).is_err());
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            exp: 0,
            iat: 0,
            iss: "test_issuer".to_string(),
            jti: "x".to_string(),
        };
        assert!(matches!(claims.agent_id(), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_expiry_matches_ttl() {
        let service = service("test_secret_key");
        let token = service.create_token(AgentId::from_i64(1)).unwrap();
        let claims = service.verify_token(&token).unwrap();

        // Token should expire in ~30 minutes
        let now = chrono::Utc::now().timestamp();
        let expires_in = claims.exp - now;
        assert!(expires_in > 29 * 60);
        assert!(expires_in <= 30 * 60);
    }
}
