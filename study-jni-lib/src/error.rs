use std::{fmt, io, result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("runtime error: {0}")]
    Runtime(String),

    #[error("jni error: {0}")]
    Jni(#[from] jni::errors::Error),

    #[error("attach error: {0}")]
    Attach(String),

    #[error("JavaVM not initialized, JNI_OnLoad has not run")]
    VmNotLoaded,

    #[error("thread spawn error: {0}")]
    Spawn(#[from] io::Error),

    #[error("worker thread `{0}` panicked")]
    WorkerPanicked(String),
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub fn config<T: fmt::Display>(inner: T) -> Self {
        Self::Config(inner.to_string())
    }
    pub fn runtime<T: fmt::Display>(inner: T) -> Self {
        Self::Runtime(inner.to_string())
    }
    pub fn attach<T: fmt::Display>(inner: T) -> Self {
        Self::Attach(inner.to_string())
    }

    /// True when the failure came from a Java exception that is still pending
    /// on the calling thread.
    pub fn is_java_exception(&self) -> bool {
        matches!(self, Self::Jni(jni::errors::Error::JavaException))
    }
}
