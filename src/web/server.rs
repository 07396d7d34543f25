use crate::error::Result;
use crate::tools::env_args::retrieve_arg_value;
use crate::web::api;
use rocket::{Build, Rocket};

const PORT_ARG: &str = "--port";
const DEFAULT_PORT: i32 = 8000;

pub fn build_server() -> Result<Rocket<Build>> {
    let api_port = get_api_port();
    let rocket_build = rocket::build()
        .configure(rocket::Config::figment().merge(("port", api_port)));

    api::server::build_api(rocket_build)
}

fn get_api_port() -> i32 {
    retrieve_arg_value(PORT_ARG)
        .and_then(|port| port.parse::<i32>().ok())
        .unwrap_or(DEFAULT_PORT)
}
