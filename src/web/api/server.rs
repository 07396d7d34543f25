use crate::database::init_pool;
use crate::error::Result;
use crate::notification::scheduler::spawn_periodic_jobs;
use crate::web::api::{
    checkins_controller, coaches_controller, emails_controller, members_controller,
    portal_controller, sessions_controller, workouts_controller,
};
use crate::web::session_storage::SessionStorage;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use std::sync::Mutex;

pub fn build_api(rocket_build: Rocket<Build>) -> Result<Rocket<Build>> {
    let pool = init_pool()?;

    Ok(rocket_build
        .manage(pool)
        .manage(Mutex::new(SessionStorage::default()))
        .attach(AdHoc::on_liftoff("Scheduled email dispatch", |rocket| {
            Box::pin(async move {
                if let Some(pool) =
                    rocket.state::<Pool<ConnectionManager<SqliteConnection>>>()
                {
                    spawn_periodic_jobs(pool.clone());
                }
            })
        }))
        .mount(
            "/api/",
            routes![
                members_controller::list_members,
                members_controller::create_member,
                members_controller::get_member,
                members_controller::update_member,
                members_controller::delete_member,
                members_controller::member_stats,
                members_controller::bulk_import_members,
                coaches_controller::list_coaches,
                coaches_controller::create_coach,
                coaches_controller::coach_schedule,
                coaches_controller::add_coach_schedule,
                coaches_controller::coach_availability,
                sessions_controller::list_sessions,
                sessions_controller::create_session,
                sessions_controller::join_session,
                sessions_controller::leave_session,
                checkins_controller::checkin,
                checkins_controller::checkout,
                emails_controller::send_emails,
                emails_controller::list_email_logs,
                portal_controller::login,
                portal_controller::dashboard,
                workouts_controller::list_workout_plans,
                workouts_controller::create_workout_plan,
                workouts_controller::assign_workout_plan,
                workouts_controller::log_workout,
                workouts_controller::list_workout_logs,
            ],
        ))
}
