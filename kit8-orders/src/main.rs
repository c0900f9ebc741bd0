#[macro_use]
extern crate rocket;

use clap::Parser;
use kit8_core::*;

// The only changes in here should be mounting new controller methods

#[launch]
fn rocket() -> _ {
    env_logger::init();
    let args = args::Args::parse();
    match server::from_args(&args, args.orders_port) {
        Ok(base) => {
            log::info!("kit8-orders is online");
            base.mount(kit8_orders::BASE, kit8_orders::routes())
        }
        Err(e) => {
            log::error!("kit8-orders failed to start: {}", e);
            std::process::exit(1);
        }
    }
}
