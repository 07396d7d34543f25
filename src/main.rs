mod checkin;
mod coach;
mod database;
mod error;
mod member;
mod notification;
mod session;
mod tools;
mod web;

#[macro_use]
extern crate rocket;
#[macro_use]
extern crate log;

#[launch]
fn rocket() -> _ {
    env_logger::init();

    match web::build_server() {
        Ok(rocket_build) => rocket_build,
        Err(error) => {
            error!("Initialization failed, aborting...\n{error:#?}");
            panic!();
        }
    }
}
