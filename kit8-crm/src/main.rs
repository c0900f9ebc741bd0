#[macro_use]
extern crate rocket;

use clap::Parser;
use kit8_core::*;

// The only changes in here should be mounting new controller methods

#[launch]
fn rocket() -> _ {
    env_logger::init();
    let args = args::Args::parse();
    match server::from_args(&args, args.crm_port) {
        Ok(base) => {
            log::info!("kit8-crm is online");
            base.mount(kit8_crm::BASE, kit8_crm::routes())
        }
        Err(e) => {
            log::error!("kit8-crm failed to start: {}", e);
            std::process::exit(1);
        }
    }
}
