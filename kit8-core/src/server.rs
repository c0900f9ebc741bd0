//! Shared rocket setup for the combined and standalone servers

use crate::{
    args,
    auth::AuthConfig,
    error::Kit8Error,
    repository::{
        self,
        Stores,
    },
    reqres::ErrorResponse,
};
use log::info;
use rocket::{
    catch,
    catchers,
    http::Status,
    response::status::Custom,
    serde::json::Json,
    Build,
    Rocket,
};

fn error_response(status: Status, error: &str) -> Custom<Json<ErrorResponse>> {
    Custom(
        status,
        Json(ErrorResponse {
            error: String::from(error),
        }),
    )
}

// Catchers
//----------------------------------------------------------------

#[catch(400)]
pub fn bad_request() -> Custom<Json<ErrorResponse>> {
    error_response(Status::BadRequest, "Bad request")
}

#[catch(401)]
pub fn unauthorized() -> Custom<Json<ErrorResponse>> {
    error_response(Status::Unauthorized, "Unauthorized")
}

#[catch(404)]
pub fn not_found() -> Custom<Json<ErrorResponse>> {
    error_response(Status::NotFound, "Resource does not exist")
}

#[catch(422)]
pub fn unprocessable() -> Custom<Json<ErrorResponse>> {
    error_response(Status::UnprocessableEntity, "Invalid request body")
}

#[catch(500)]
pub fn internal_error() -> Custom<Json<ErrorResponse>> {
    error_response(Status::InternalServerError, "Internal server error")
}

/// Rocket instance with auth config, stores and catchers, no routes mounted
pub fn base(config: rocket::Config, auth: AuthConfig, stores: Stores) -> Rocket<Build> {
    rocket::custom(config)
        .manage(auth)
        .manage(stores)
        .register(
            "/",
            catchers![bad_request, unauthorized, not_found, unprocessable, internal_error],
        )
}

/// Resolve auth and store settings from the cmd line and build the base
pub fn from_args(args: &args::Args, port: u16) -> Result<Rocket<Build>, Kit8Error> {
    let auth = AuthConfig::from_args(args)?;
    let kind = repository::get_store_kind(args)?;
    info!("starting in {} mode", auth.release_env.value());
    let config = rocket::Config {
        port,
        ..rocket::Config::debug_default()
    };
    Ok(base(config, auth, Stores::new(kind)))
}

/// Settings for tests, development auth with the given secret
pub fn test_base(stores: Stores) -> Rocket<Build> {
    let auth = AuthConfig::new(crate::utils::ReleaseEnvironment::Development, "test-secret", 60);
    base(rocket::Config::debug_default(), auth, stores)
}
