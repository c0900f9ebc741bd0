#[macro_use]
extern crate rocket;

use clap::Parser;
use kit8_core::*;

// The only changes in here should be mounting new controller methods

#[launch]
fn rocket() -> _ {
    env_logger::init();
    let args = args::Args::parse();
    match server::from_args(&args, args.cashier_port) {
        Ok(base) => {
            log::info!("kit8-cashier is online");
            base.mount(kit8_cashier::BASE, kit8_cashier::routes())
        }
        Err(e) => {
            log::error!("kit8-cashier failed to start: {}", e);
            std::process::exit(1);
        }
    }
}
