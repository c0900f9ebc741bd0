#[macro_use]
extern crate rocket;

use clap::Parser;
use kit8_core::*;

mod controller;

// The only changes in here should be mounting new controller methods
#[launch]
fn rocket() -> _ {
    env_logger::init();
    let args = args::Args::parse();
    if let Some(customer_id) = args.issue_token {
        match auth::AuthConfig::from_args(&args).and_then(|a| a.create_token(customer_id)) {
            Ok(token) => {
                println!("{}", token);
                std::process::exit(0);
            }
            Err(e) => {
                log::error!("failed to issue token: {}", e);
                std::process::exit(1);
            }
        }
    }
    match server::from_args(&args, args.port) {
        Ok(base) => {
            log::info!("{} is online", APP_NAME);
            controller::mount(base)
        }
        Err(e) => {
            log::error!("{} failed to start: {}", APP_NAME, e);
            std::process::exit(1);
        }
    }
}
