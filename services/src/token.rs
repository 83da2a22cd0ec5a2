//! Signed, time-limited attendance tokens.
//!
//! A token binds an attendance instance to its course, class type and
//! registered coordinates. Tokens are HS256 JWTs signed with the server
//! secret; expiry is checked against a caller-supplied clock so the state
//! machine and its tests agree on what "now" is.

use chrono::{DateTime, Duration, Utc};
use db::models::attendance_instance::ClassType;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid attendance token")]
    InvalidToken,
    #[error("Attendance token has expired")]
    ExpiredToken,
    #[error("Invalid attendance token payload")]
    MalformedPayload,
    #[error("Failed to sign attendance token: {0}")]
    Signing(String),
}

/// What the token vouches for.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPayload {
    pub course_id: String,
    pub instance_id: String,
    pub class_type: ClassType,
    pub latitude: f64,
    pub longitude: f64,
}

/// Claims as they appear on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceClaims {
    pub course_id: String,
    pub instance_id: String,
    pub class_type: ClassType,
    pub latitude: f64,
    pub longitude: f64,
    pub iat: i64,
    pub exp: i64,
}

/// Every claim optional so a missing one surfaces as `MalformedPayload`
/// rather than a generic decode failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LooseClaims {
    course_id: Option<String>,
    instance_id: Option<String>,
    class_type: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    iat: Option<i64>,
    exp: Option<i64>,
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Signs `payload`, returning the token and its expiry (`now + ttl`).
    pub fn issue(
        &self,
        payload: &TokenPayload,
        now: DateTime<Utc>,
    ) -> Result<(String, DateTime<Utc>), TokenError> {
        let expires_at = now + self.ttl;
        let claims = AttendanceClaims {
            course_id: payload.course_id.clone(),
            instance_id: payload.instance_id.clone(),
            class_type: payload.class_type,
            latitude: payload.latitude,
            longitude: payload.longitude,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))?;
        Ok((token, expires_at))
    }

    /// Checks the signature, the presence of every claim, then expiry.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<AttendanceClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        let data = decode::<LooseClaims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => {
                    TokenError::MalformedPayload
                }
                ErrorKind::ExpiredSignature => TokenError::ExpiredToken,
                _ => TokenError::InvalidToken,
            }
        })?;

        let raw = data.claims;
        let (Some(course_id), Some(instance_id), Some(class_type), Some(exp)) =
            (raw.course_id, raw.instance_id, raw.class_type, raw.exp)
        else {
            return Err(TokenError::MalformedPayload);
        };
        let class_type: ClassType = class_type
            .parse()
            .map_err(|_| TokenError::MalformedPayload)?;

        if now.timestamp() > exp {
            return Err(TokenError::ExpiredToken);
        }

        Ok(AttendanceClaims {
            course_id,
            instance_id,
            class_type,
            latitude: raw.latitude.unwrap_or(0.0),
            longitude: raw.longitude.unwrap_or(0.0),
            iat: raw.iat.unwrap_or(exp - self.ttl.num_seconds()),
            exp,
        })
    }
}
