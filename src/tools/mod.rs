use std::fmt::Debug;

pub mod email;
pub mod env_args;

pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

pub fn log_message<E: Debug>(message: &str) -> impl FnOnce(E) + '_ {
    move |e| {
        error!("{message}\n{e:#?}");
    }
}

pub fn log_message_and_return<E: Debug, T>(message: &str, value_to_return: T) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
