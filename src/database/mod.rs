use crate::database::error::DatabaseError::{ConnectionFailed, MissingDatabaseUrl};
use crate::database::migrations::run_migrations;
use crate::error::Result;
use crate::tools::env_args::retrieve_expected_arg_value;
use crate::tools::log_error_and_return;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool};

pub(crate) mod dao;
pub(crate) mod error;
mod migrations;
mod model;
mod schema;

const DATABASE_URL_ARG: &str = "--database-url";

/// Build the connection pool and bring the schema up to date.
pub fn init_pool() -> Result<Pool<ConnectionManager<SqliteConnection>>> {
    let database_url = retrieve_expected_arg_value(DATABASE_URL_ARG, MissingDatabaseUrl)?;
    init_pool_from_url(&database_url)
}

fn init_pool_from_url(database_url: &str) -> Result<Pool<ConnectionManager<SqliteConnection>>> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .build(manager)
        .map_err(log_error_and_return(ConnectionFailed))?;
    let mut connection = pool.get().map_err(log_error_and_return(ConnectionFailed))?;
    run_migrations(&mut connection)?;

    Ok(pool)
}

/// Run a test against a fresh database file in its own temp directory,
/// so concurrently running tests never share state.
#[cfg(test)]
pub fn with_temp_database<F, T>(function: F) -> T
where
    F: FnOnce(Pool<ConnectionManager<SqliteConnection>>) -> T,
{
    use std::time::SystemTime;

    let temp_dir = std::env::temp_dir().join(
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
            .to_string(),
    );
    std::fs::create_dir(&temp_dir).unwrap();
    let database_url = temp_dir.join("database.db").to_str().unwrap().to_string();
    let pool = init_pool_from_url(&database_url).unwrap();

    function(pool)
}

#[cfg(test)]
mod tests {
    use crate::database::with_temp_database;
    use diesel::RunQueryDsl;
    use diesel::sql_types::Integer;

    #[derive(diesel::QueryableByName, PartialEq, Debug)]
    struct Row {
        #[diesel(sql_type = Integer)]
        value: i32,
    }

    #[test]
    fn should_run_migrations_on_temp_database() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            let rows = diesel::sql_query("SELECT COUNT(*) AS value FROM member")
                .load::<Row>(&mut connection)
                .unwrap();
            assert_eq!(vec![Row { value: 0 }], rows);
        })
    }
}
