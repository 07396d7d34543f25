use crate::notification::dispatch::send_notifications;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dto::email_kind::EmailKind;
use rocket::tokio;
use std::time::Duration;

const DAILY_INTERVAL_SECS: u64 = 86_400;
const WEEKLY_INTERVAL_SECS: u64 = 604_800;

/// Register the recurring dispatch jobs. Subscription reminders, birthday
/// wishes and inactivity alerts go out daily; motivational emails weekly.
/// Each job body runs with `force_send=false`, so the cooldown rules make
/// overlapping or repeated runs harmless.
pub fn spawn_periodic_jobs(pool: Pool<ConnectionManager<SqliteConnection>>) {
    spawn_job(pool.clone(), EmailKind::Subscription, DAILY_INTERVAL_SECS);
    spawn_job(pool.clone(), EmailKind::Birthday, DAILY_INTERVAL_SECS);
    spawn_job(pool.clone(), EmailKind::Inactivity, DAILY_INTERVAL_SECS);
    spawn_job(pool, EmailKind::Motivational, WEEKLY_INTERVAL_SECS);
}

fn spawn_job(
    pool: Pool<ConnectionManager<SqliteConnection>>,
    kind: EmailKind,
    interval_secs: u64,
) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick fires right away; the cooldown absorbs it
        // when the kind has already been served today.
        loop {
            interval.tick().await;
            match send_notifications(&pool, &kind, None, false).await {
                Ok(summary) => info!(
                    "Scheduled {kind} dispatch finished [sent: {}, failed: {}]",
                    summary.sent(),
                    summary.failed()
                ),
                Err(error) => error!("Scheduled {kind} dispatch failed\n{error:#?}"),
            }
        }
    });
}
