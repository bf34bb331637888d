use chrono::{DateTime, Utc};
use futures::Future;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub use conditional_types::{EnvFuture, EnvFutureExt};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EnvError {
    /// Serde error when serializing or deserializing a stored value
    Serde(String),
    StorageUnavailable,
}

impl EnvError {
    pub fn message(&self) -> String {
        match &self {
            EnvError::Serde(message) => format!("Serialization error: {message}"),
            EnvError::StorageUnavailable => "Storage is not available".to_owned(),
        }
    }
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<serde_json::Error> for EnvError {
    fn from(error: serde_json::Error) -> Self {
        EnvError::Serde(error.to_string())
    }
}

/// The site core only ever runs on a single thread (the browser main thread or
/// a static generator), so effect futures are never required to be `Send`.
mod conditional_types {
    use futures::{future::LocalBoxFuture, Future, FutureExt};

    pub type EnvFuture<'a, T> = LocalBoxFuture<'a, T>;

    pub trait EnvFutureExt: Future {
        fn boxed_env<'a>(self) -> EnvFuture<'a, Self::Output>
        where
            Self: Sized + 'a,
        {
            self.boxed_local()
        }
    }
}

impl<T: ?Sized> EnvFutureExt for T where T: Future {}

pub type TryEnvFuture<T> = EnvFuture<'static, Result<T, EnvError>>;

/// Everything the core needs from the host: client-local key-value storage,
/// an executor, the wall clock, a timer and a log sink.
///
/// Values are stored JSON-encoded under plain string keys. Passing `None` to
/// [`Env::set_storage`] removes the key.
pub trait Env {
    fn get_storage<T: for<'de> Deserialize<'de> + 'static>(key: &str) -> TryEnvFuture<Option<T>>;
    fn set_storage<T: Serialize>(key: &str, value: Option<&T>) -> TryEnvFuture<()>;
    fn exec_concurrent<F: Future<Output = ()> + 'static>(future: F);
    fn exec_sequential<F: Future<Output = ()> + 'static>(future: F);
    fn now() -> DateTime<Utc>;
    fn delay(duration: Duration) -> EnvFuture<'static, ()>;
    #[cfg(debug_assertions)]
    fn log(message: String);
}
