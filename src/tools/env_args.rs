#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;

/// Retrieve the value associated to a `--name=value` argument passed to the app.
///
/// /!\ As this works on global variables,
/// a function using `retrieve_arg_value` could be tricky to test.
/// To do so, wrap your test with `with_env_args(args, fn)`.
/// This function is only available in a test context.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let args: Vec<String> = get_env_args();
    let arg_prefix = format!("{arg_name}=");
    for arg in args {
        if arg.starts_with(&arg_prefix) {
            return arg.split_once("=").map(|(_, value)| value.to_owned());
        }
    }

    None
}

/// Retrieve an arg value, or the given error when the arg is absent.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value(arg_name).ok_or(error_if_missing)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// A mutable `Vec<String>` to host env args for tests.
    /// When a test is run with `with_env_args`,
    /// the inner `Vec` is set to whatever param is passed.
    /// It is then reset to its previous state.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}
#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.clone().into_inner())
}

#[cfg(test)]
/// When running tests, env args are extended from within the app.
/// You can set them up from there by wrapping your test with this function.
pub fn with_env_args<F, T>(mut args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let global_env_args = std::env::args().collect::<Vec<String>>();
        args.extend_from_slice(&global_env_args);
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}
