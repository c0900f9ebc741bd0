//! Tenant extraction from bearer tokens

use crate::{
    args,
    error::Kit8Error,
    utils::{
        self,
        ReleaseEnvironment,
    },
};
use hmac::{
    Hmac,
    Mac,
};
use jwt::{
    AlgorithmType,
    Header,
    SignWithKey,
    Token,
    VerifyWithKey,
};
use log::{
    debug,
    error,
    warn,
};
use rocket::{
    http::Status,
    outcome::Outcome,
    request,
    request::FromRequest,
    Request,
};
use sha2::Sha384;
use std::collections::BTreeMap;

/// Only used when `KIT8_JWT_SECRET_KEY` is unset in development
const DEV_JWT_SECRET: &str = "kit8-development-secret";

/// Token verification settings, held in rocket managed state
#[derive(Clone)]
pub struct AuthConfig {
    pub release_env: ReleaseEnvironment,
    secret: String,
    /// Lifetime of issued tokens in minutes
    pub token_timeout: i64,
}

impl AuthConfig {
    pub fn new(release_env: ReleaseEnvironment, secret: &str, token_timeout: i64) -> AuthConfig {
        AuthConfig {
            release_env,
            secret: String::from(secret),
            token_timeout,
        }
    }

    /// Build from cmd line args and the `KIT8_JWT_SECRET_KEY` environment variable
    pub fn from_args(args: &args::Args) -> Result<AuthConfig, Kit8Error> {
        let env = utils::get_release_env(args);
        let secret = std::env::var(crate::KIT8_JWT_SECRET_KEY).unwrap_or_default();
        AuthConfig::with_secret(env, &secret, args.token_timeout)
    }

    fn with_secret(
        env: ReleaseEnvironment,
        secret: &str,
        token_timeout: i64,
    ) -> Result<AuthConfig, Kit8Error> {
        if !secret.is_empty() {
            return Ok(AuthConfig::new(env, secret, token_timeout));
        }
        if env == ReleaseEnvironment::Production {
            error!("{} is required in production", crate::KIT8_JWT_SECRET_KEY);
            return Err(Kit8Error::Configuration(format!(
                "{} is not set",
                crate::KIT8_JWT_SECRET_KEY
            )));
        }
        warn!("{} not set, using the development secret", crate::KIT8_JWT_SECRET_KEY);
        Ok(AuthConfig::new(env, DEV_JWT_SECRET, token_timeout))
    }

    fn key(&self) -> Result<Hmac<Sha384>, Kit8Error> {
        Hmac::new_from_slice(self.secret.as_bytes()).map_err(|_| Kit8Error::Internal)
    }

    /// Sign a token for the customer that expires after `token_timeout` minutes
    pub fn create_token(&self, customer_id: i64) -> Result<String, Kit8Error> {
        let expiration = self
            .token_timeout
            .checked_mul(60)
            .and_then(|secs| chrono::offset::Utc::now().timestamp().checked_add(secs))
            .ok_or_else(|| {
                error!("token timeout of {} minutes is out of range", self.token_timeout);
                Kit8Error::Configuration(format!(
                    "token timeout out of range: {}",
                    self.token_timeout
                ))
            })?;
        self.sign(customer_id, expiration)
    }

    fn sign(&self, customer_id: i64, expiration: i64) -> Result<String, Kit8Error> {
        let key = self.key()?;
        let header = Header {
            algorithm: AlgorithmType::Hs384,
            ..Default::default()
        };
        let mut claims = BTreeMap::new();
        claims.insert(crate::CUSTOMER_ID_CLAIM, customer_id.to_string());
        claims.insert(crate::EXPIRATION_CLAIM, expiration.to_string());
        let token = Token::new(header, claims).sign_with_key(&key).map_err(|e| {
            error!("failed to sign token: {:?}", e);
            Kit8Error::Internal
        })?;
        Ok(String::from(token.as_str()))
    }

    /// Check signature and expiration, then read the tenant claim
    pub fn verify_token(&self, token: &str) -> Result<CustomerId, Kit8Error> {
        let key = self.key()?;
        let jwt: Result<Token<Header, BTreeMap<String, String>, _>, jwt::Error> =
            token.verify_with_key(&key);
        let verified = jwt.map_err(|e| {
            debug!("token rejected: {:?}", e);
            Kit8Error::Unauthorized
        })?;
        let claims = verified.claims();
        let now: i64 = chrono::offset::Utc::now().timestamp();
        let expire = claims
            .get(crate::EXPIRATION_CLAIM)
            .and_then(|e| e.parse::<i64>().ok())
            .unwrap_or(0);
        if now > expire {
            debug!("token expired at {}", expire);
            return Err(Kit8Error::Unauthorized);
        }
        let raw = claims
            .get(crate::CUSTOMER_ID_CLAIM)
            .ok_or(Kit8Error::Unauthorized)?;
        CustomerId::parse(raw)
    }

    /// Resolve the tenant from the `Authorization` and `X-Customer-Id` header values.
    ///
    /// The customer header is only honored in development and only when no
    ///
    /// authorization header was sent.
    pub fn resolve(
        &self,
        authorization: Option<&str>,
        customer_header: Option<&str>,
    ) -> Result<CustomerId, Kit8Error> {
        match authorization {
            Some(value) => {
                let token = value
                    .strip_prefix("Bearer ")
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .ok_or(Kit8Error::Unauthorized)?;
                self.verify_token(token)
            }
            None => match customer_header {
                Some(raw) if self.release_env == ReleaseEnvironment::Development => {
                    CustomerId::parse(raw)
                }
                _ => Err(Kit8Error::Unauthorized),
            },
        }
    }
}

/// The tenant bound to the current request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomerId(i64);

impl CustomerId {
    pub fn new(customer_id: i64) -> CustomerId {
        CustomerId(customer_id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    fn parse(raw: &str) -> Result<CustomerId, Kit8Error> {
        match raw.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(CustomerId(id)),
            _ => {
                debug!("malformed customer id: {}", raw);
                Err(Kit8Error::Unauthorized)
            }
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CustomerId {
    type Error = Kit8Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let config = match request.rocket().state::<AuthConfig>() {
            Some(c) => c,
            None => {
                error!("auth config is not managed");
                return Outcome::Error((Status::InternalServerError, Kit8Error::Internal));
            }
        };
        let authorization = request.headers().get_one("Authorization");
        let customer_header = request.headers().get_one(crate::CUSTOMER_ID_HEADER);
        match config.resolve(authorization, customer_header) {
            Ok(customer) => Outcome::Success(customer),
            Err(e) => Outcome::Error((e.status(), e)),
        }
    }
}

// Tests
//-------------------------------------------------------------------------------
