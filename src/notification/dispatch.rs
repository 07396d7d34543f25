use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::error::Result;
use crate::member::status;
use crate::notification::eligibility::select_eligible;
use crate::notification::error::NotificationError;
use crate::tools::log_error_and_return;
#[cfg(not(test))]
use crate::tools::email::send_email;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dto::email_kind::EmailKind;
use dto::email_log_entry::{EmailStatus, NewEmailLogEntry};
use dto::member::Member;
use dto::send_email::SendSummary;
use tera::{Context, Tera};

/// Send a `kind` email to every eligible member and record each attempt in
/// the log. One member's failure never stops the others: it becomes a
/// `failed` log entry and the loop moves on. The returned summary is a
/// convenience; the log entries are the durable record.
pub async fn send_notifications(
    pool: &Pool<ConnectionManager<SqliteConnection>>,
    kind: &EmailKind,
    member_ids: Option<&[i32]>,
    force_send: bool,
) -> Result<SendSummary> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(DatabaseError::ConnectionFailed))?;

    let now = get_now();
    let eligible = select_eligible(&mut connection, kind, now.date(), member_ids, force_send)?;
    let tera = create_tera_renderer()?;

    let mut summary = SendSummary::default();
    for member in &eligible {
        match send_to_member(&mut connection, &tera, kind, member, now).await? {
            EmailStatus::Failed => summary.record_failed(),
            _ => summary.record_sent(),
        }
    }

    info!(
        "{kind} emails completed [sent: {}, failed: {}]",
        summary.sent(),
        summary.failed()
    );

    Ok(summary)
}

/// Render, deliver and log one email. Only storage errors propagate;
/// render and delivery failures are folded into the log entry.
async fn send_to_member(
    connection: &mut SqliteConnection,
    tera: &Tera,
    kind: &EmailKind,
    member: &Member,
    now: NaiveDateTime,
) -> Result<EmailStatus, DatabaseError> {
    let subject = create_subject(kind, member, now.date());

    let delivery = match create_body(tera, kind, member, now.date()) {
        Ok(body) => deliver(member.email(), &subject, &body).await.map(|()| body),
        Err(error) => Err(error),
    };

    let entry = match delivery {
        Ok(body) => {
            info!("{kind} email sent to {}", member.email());
            NewEmailLogEntry::new(
                *member.id(),
                *kind,
                now,
                EmailStatus::Sent,
                None,
                subject,
                body,
            )
        }
        Err(error) => {
            error!("Failed to send {kind} email to {}\n{error:#?}", member.email());
            NewEmailLogEntry::new(
                *member.id(),
                *kind,
                now,
                EmailStatus::Failed,
                Some(error.to_string()),
                subject,
                String::new(),
            )
        }
    };

    let entry = dao::email_log::insert_entry(connection, &entry)?;

    Ok(*entry.status())
}

/// The subjects of the dispatchable kinds embed per-member fields; the
/// reminder kinds only ever show up as their generic titles.
fn create_subject(kind: &EmailKind, member: &Member, today: NaiveDate) -> String {
    match kind {
        EmailKind::Subscription => format!(
            "Subscription Reminder - Due in {} days",
            status::days_until_due(member, today)
        ),
        EmailKind::Motivational => "Stay Strong! Your Fitness Journey Continues".to_string(),
        EmailKind::Birthday => format!("Happy Birthday, {}! 🎉", member.first_name()),
        EmailKind::Inactivity => "We Miss You! Come Back to the Gym".to_string(),
        EmailKind::WorkoutReminder => "Workout Reminder".to_string(),
        EmailKind::SessionReminder => "Training Session Reminder".to_string(),
    }
}

fn create_body(
    tera: &Tera,
    kind: &EmailKind,
    member: &Member,
    today: NaiveDate,
) -> Result<String, NotificationError> {
    let mut context = Context::new();
    context.insert("first_name", member.first_name());
    context.insert("membership_type", &member.membership_type().to_string());
    match kind {
        EmailKind::Subscription => {
            context.insert("days_until_due", &status::days_until_due(member, today));
            context.insert("due_date", &member.subscription_due_date().to_string());
        }
        EmailKind::Birthday => {
            context.insert("age", &status::age(member, today));
        }
        EmailKind::Inactivity => {
            context.insert(
                "days_since_checkin",
                &status::days_since_checkin(member, today).unwrap_or(0),
            );
        }
        _ => {}
    }

    let body = tera.render(template_name(kind)?, &context)?;

    Ok(body)
}

fn template_name(kind: &EmailKind) -> Result<&'static str, NotificationError> {
    match kind {
        EmailKind::Subscription => Ok("subscription_reminder.html.tera"),
        EmailKind::Motivational => Ok("motivational_email.html.tera"),
        EmailKind::Birthday => Ok("birthday_wish.html.tera"),
        EmailKind::Inactivity => Ok("inactivity_alert.html.tera"),
        EmailKind::WorkoutReminder | EmailKind::SessionReminder => {
            Err(NotificationError::InvalidKind(*kind))
        }
    }
}

fn create_tera_renderer() -> Result<Tera, NotificationError> {
    Ok(Tera::new("public/templates/emails/*.html.tera")?)
}

#[cfg(not(test))]
async fn deliver(recipient: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
    Ok(send_email(recipient, subject, body, body).await?)
}

/// Delivery is mocked out in tests; addresses containing "undeliverable"
/// exercise the failure path.
#[cfg(test)]
async fn deliver(recipient: &str, subject: &str, body: &str) -> Result<(), NotificationError> {
    if recipient.contains("undeliverable") {
        return Err(NotificationError::Email(
            crate::tools::email::Error::CantSendMessage,
        ));
    }
    println!("Mocking email sending [recipient: {recipient}, subject: {subject}, body: {body}]");
    Ok(())
}

#[cfg(not(test))]
fn get_now() -> NaiveDateTime {
    chrono::offset::Utc::now().naive_utc()
}

#[cfg(test)]
fn get_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 15)
        .expect("Should be great for testing")
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    fn member_due_in_3_days(email: &str) -> Member {
        Member::new_test(1, email, day(6, 18))
    }

    mod create_subject {
        use super::*;

        #[test]
        fn should_embed_days_until_due() {
            let member = member_due_in_3_days("jane@email.com");
            let subject = create_subject(&EmailKind::Subscription, &member, day(6, 15));
            assert_eq!("Subscription Reminder - Due in 3 days", subject);
        }

        #[test]
        fn should_greet_by_first_name() {
            let member = member_due_in_3_days("jane@email.com");
            let subject = create_subject(&EmailKind::Birthday, &member, day(6, 15));
            assert_eq!("Happy Birthday, Jane! 🎉", subject);
        }
    }

    mod create_body {
        use super::*;

        #[test]
        fn should_render_subscription_reminder() {
            let tera = create_tera_renderer().unwrap();
            let member = member_due_in_3_days("jane@email.com");

            let body = create_body(&tera, &EmailKind::Subscription, &member, day(6, 15)).unwrap();

            assert!(body.contains("Jane"));
            assert!(body.contains("2025-06-18"));
            assert!(body.contains("3 days"));
        }

        #[test]
        fn should_render_birthday_wish_without_age_for_placeholder_year() {
            let tera = create_tera_renderer().unwrap();
            let member = member_due_in_3_days("jane@email.com")
                .with_birthday(NaiveDate::from_ymd_opt(1900, 6, 15).unwrap());

            let body = create_body(&tera, &EmailKind::Birthday, &member, day(6, 15)).unwrap();

            assert!(body.contains("Happy birthday, Jane"));
        }

        #[test]
        fn should_render_inactivity_alert_with_gap() {
            let tera = create_tera_renderer().unwrap();
            let member = member_due_in_3_days("jane@email.com")
                .with_last_checkin_date(day(6, 5));

            let body = create_body(&tera, &EmailKind::Inactivity, &member, day(6, 15)).unwrap();

            assert!(body.contains("10 days"));
        }

        #[test]
        fn fail_for_reminder_kind() {
            let tera = create_tera_renderer().unwrap();
            let member = member_due_in_3_days("jane@email.com");

            let error = create_body(&tera, &EmailKind::WorkoutReminder, &member, day(6, 15))
                .unwrap_err();

            assert_eq!(
                NotificationError::InvalidKind(EmailKind::WorkoutReminder),
                error
            );
        }
    }

    mod create_tera_renderer {
        use super::*;

        #[test]
        fn success() {
            create_tera_renderer().unwrap();
        }
    }

    mod send_notifications {
        use super::*;
        use crate::database::dao::email_log::retrieve_entries;
        use crate::database::dao::member::insert_member;
        use crate::database::dao::member::tests::test_created_at;
        use crate::database::with_temp_database;
        use crate::error::ApplicationError;
        use crate::notification::error::NotificationError::InvalidKind;
        use dto::member::NewMember;
        use dto::membership_type::MembershipType;
        use rocket::tokio::runtime::Runtime;

        fn due_soon_member(email: &str) -> NewMember {
            NewMember::new(
                "Jane Doe".to_string(),
                email.to_string(),
                None,
                day(6, 18),
                None,
                None,
                MembershipType::Basic,
                true,
            )
        }

        #[test]
        fn should_send_and_log() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let mut connection = pool.get().unwrap();
                    let member = insert_member(
                        &mut connection,
                        &due_soon_member("jane@email.com"),
                        test_created_at(),
                    )
                    .unwrap();

                    let summary =
                        send_notifications(&pool, &EmailKind::Subscription, None, false)
                            .await
                            .unwrap();

                    assert_eq!(SendSummary::new(1, 0), summary);

                    let entries =
                        retrieve_entries(&mut connection, Some(*member.id()), None).unwrap();
                    assert_eq!(1, entries.len());
                    assert_eq!(&EmailStatus::Sent, entries[0].status());
                    assert_eq!("Subscription Reminder - Due in 3 days", entries[0].subject());
                    assert!(entries[0].content().contains("Jane"));
                })
            })
        }

        #[test]
        fn rerun_is_a_no_op_until_forced() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let mut connection = pool.get().unwrap();
                    let member = insert_member(
                        &mut connection,
                        &due_soon_member("jane@email.com"),
                        test_created_at(),
                    )
                    .unwrap();

                    let first = send_notifications(&pool, &EmailKind::Subscription, None, false)
                        .await
                        .unwrap();
                    assert_eq!(SendSummary::new(1, 0), first);

                    // The cooldown swallows the second run entirely.
                    let second = send_notifications(&pool, &EmailKind::Subscription, None, false)
                        .await
                        .unwrap();
                    assert_eq!(SendSummary::new(0, 0), second);

                    // Forcing re-sends and appends a second audit entry.
                    let forced = send_notifications(&pool, &EmailKind::Subscription, None, true)
                        .await
                        .unwrap();
                    assert_eq!(SendSummary::new(1, 0), forced);

                    let entries =
                        retrieve_entries(&mut connection, Some(*member.id()), None).unwrap();
                    assert_eq!(2, entries.len());
                })
            })
        }

        #[test]
        fn failure_is_logged_and_does_not_abort_the_run() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let mut connection = pool.get().unwrap();
                    let failing = insert_member(
                        &mut connection,
                        &due_soon_member("undeliverable@email.com"),
                        test_created_at(),
                    )
                    .unwrap();
                    insert_member(
                        &mut connection,
                        &due_soon_member("jane@email.com"),
                        test_created_at(),
                    )
                    .unwrap();

                    let summary =
                        send_notifications(&pool, &EmailKind::Subscription, None, false)
                            .await
                            .unwrap();

                    assert_eq!(SendSummary::new(1, 1), summary);

                    let entries =
                        retrieve_entries(&mut connection, Some(*failing.id()), None).unwrap();
                    assert_eq!(1, entries.len());
                    assert_eq!(&EmailStatus::Failed, entries[0].status());
                    assert_eq!(
                        &Some("Can't send message".to_string()),
                        entries[0].error_message()
                    );
                    assert_eq!("Subscription Reminder - Due in 3 days", entries[0].subject());

                    // A failed attempt doesn't consume the cooldown.
                    let retry = send_notifications(&pool, &EmailKind::Subscription, None, false)
                        .await
                        .unwrap();
                    assert_eq!(SendSummary::new(0, 1), retry);
                })
            })
        }

        #[test]
        fn fail_for_reminder_kind_without_partial_processing() {
            with_temp_database(|pool| {
                Runtime::new().unwrap().block_on(async {
                    let mut connection = pool.get().unwrap();
                    insert_member(
                        &mut connection,
                        &due_soon_member("jane@email.com"),
                        test_created_at(),
                    )
                    .unwrap();

                    let error =
                        send_notifications(&pool, &EmailKind::SessionReminder, None, false)
                            .await
                            .unwrap_err();

                    assert!(matches!(
                        error,
                        ApplicationError::Notification(InvalidKind(EmailKind::SessionReminder))
                    ));
                    let entries = retrieve_entries(&mut connection, None, None).unwrap();
                    assert!(entries.is_empty());
                })
            })
        }
    }
}
