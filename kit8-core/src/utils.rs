use crate::{
    args,
    error::Kit8Error,
};
use log::debug;
use rocket::serde::{
    json::{
        self,
        Json,
    },
    Deserialize,
    Deserializer,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseEnvironment {
    Development,
    Production,
}

impl ReleaseEnvironment {
    pub fn value(&self) -> String {
        match *self {
            ReleaseEnvironment::Development => String::from("development"),
            ReleaseEnvironment::Production => String::from("production"),
        }
    }
}

/// Helper for separation of dev and prod concerns
pub fn get_release_env(args: &args::Args) -> ReleaseEnvironment {
    if args.release_env == "prod" {
        ReleaseEnvironment::Production
    } else {
        ReleaseEnvironment::Development
    }
}

/// Parse a record id from the path. Only positive integers are ids.
pub fn parse_id(raw: &str, entity: &str) -> Result<i64, Kit8Error> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Kit8Error::invalid_id(entity)),
    }
}

/// Unwrap a json body, any decode failure is reported as an invalid body
pub fn parse_body<T>(body: Result<Json<T>, json::Error<'_>>) -> Result<T, Kit8Error> {
    match body {
        Ok(j) => Ok(j.into_inner()),
        Err(e) => {
            debug!("rejected request body: {:?}", e);
            Err(Kit8Error::invalid_body())
        }
    }
}

/// Field deserializer treating an explicit `null` like a missing field
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_env_test() {
        let mut args = args::Args::default();
        assert_eq!(get_release_env(&args), ReleaseEnvironment::Development);
        args.release_env = String::from("prod");
        assert_eq!(get_release_env(&args), ReleaseEnvironment::Production);
        assert_eq!(get_release_env(&args).value(), "production");
        args.release_env = String::from("staging");
        assert_eq!(get_release_env(&args), ReleaseEnvironment::Development);
    }

    #[test]
    fn parse_id_test() {
        assert_eq!(parse_id("15", "deal"), Ok(15));
        assert_eq!(parse_id("+7", "deal"), Ok(7));
        assert_eq!(parse_id("abc", "deal"), Err(Kit8Error::invalid_id("deal")));
        assert_eq!(parse_id("0", "order"), Err(Kit8Error::invalid_id("order")));
        assert_eq!(parse_id("-4", "order"), Err(Kit8Error::invalid_id("order")));
        assert_eq!(parse_id("", "payment"), Err(Kit8Error::invalid_id("payment")));
        assert_eq!(
            parse_id("99999999999999999999", "product"),
            Err(Kit8Error::invalid_id("product"))
        );
    }
}
