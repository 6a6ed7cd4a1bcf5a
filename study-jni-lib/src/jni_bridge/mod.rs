//! JNI bridge for `com.sawyer.studyjni`
//!
//! Each submodule demonstrates one part of the native interface and exports
//! the `MainActivity` natives for it.
//!
//! ## Architecture
//!
//! - `types`: process-wide state (JavaVM, config, cached Dog class)
//! - `lifecycle`: `JNI_OnLoad`, logger and config setup
//! - `registration`: natives bound through `RegisterNatives`
//! - `strings`, `fields`, `methods`, `arrays`, `objects`: managed data access
//! - `references`: global reference promotion and release
//! - `threads`: native thread that attaches, calls back and detaches
//! - `env_probe`: JNIEnv/JavaVM address reports across calls and threads
//!
//! ## Thread Model
//!
//! - Entry points run on whichever Java thread called them
//! - Native workers receive only the JavaVM and global references, and
//!   attach themselves for as long as they touch managed objects

pub mod arrays;
pub mod env_probe;
pub mod fields;
pub mod lifecycle;
pub mod methods;
pub mod objects;
pub mod references;
pub mod registration;
pub mod strings;
pub mod threads;
pub mod types;

#[cfg(test)]
pub(crate) mod test_vm;

use jni::objects::JString;
use jni::JNIEnv;
use log::{error, warn};

use crate::error::Result;

/// Class the `Java_com_sawyer_studyjni_MainActivity_*` symbols bind to.
pub const MAIN_ACTIVITY: &str = "com/sawyer/studyjni/MainActivity";
pub const SECOND_ACTIVITY: &str = "com/sawyer/studyjni/SecondActivity";

/// A native bound by symbol name rather than `RegisterNatives`.
#[derive(Debug, Clone, Copy)]
pub struct StaticExport {
    pub class: &'static str,
    pub method: &'static str,
    pub sig: &'static str,
}

const fn export(class: &'static str, method: &'static str, sig: &'static str) -> StaticExport {
    StaticExport { class, method, sig }
}

pub const STATIC_EXPORTS: &[StaticExport] = &[
    export(MAIN_ACTIVITY, "stringFromJNI", "()Ljava/lang/String;"),
    export(MAIN_ACTIVITY, "changeName", "()V"),
    export(MAIN_ACTIVITY, "changeAge", "()V"),
    export(MAIN_ACTIVITY, "changeNum", "()V"),
    export(MAIN_ACTIVITY, "callAddMethod", "()V"),
    export(MAIN_ACTIVITY, "testArrayAction", "([I[Ljava/lang/String;)V"),
    export(
        MAIN_ACTIVITY,
        "putStudent",
        "(Lcom/sawyer/studyjni/Student;Ljava/lang/String;)V",
    ),
    export(MAIN_ACTIVITY, "insertObject", "()V"),
    export(MAIN_ACTIVITY, "testQuote", "()V"),
    export(MAIN_ACTIVITY, "deleteQuote", "()V"),
    export(MAIN_ACTIVITY, "nativeThread", "()V"),
    export(MAIN_ACTIVITY, "closeThread", "()V"),
    export(MAIN_ACTIVITY, "nativeFun1", "()V"),
    export(MAIN_ACTIVITY, "nativeFun2", "()V"),
    export(MAIN_ACTIVITY, "staticFun3", "()V"),
    export(MAIN_ACTIVITY, "staticFun4", "()V"),
    export(SECOND_ACTIVITY, "nativeFun5", "()V"),
];

pub(crate) fn read_string(env: &mut JNIEnv, input: &JString) -> Result<String> {
    Ok(env.get_string(input)?.into())
}

/// Logs the outcome of an entry point. A pending Java exception is left in
/// place so the managed caller sees it.
pub(crate) fn report(entry: &str, result: Result<()>) {
    if let Err(e) = result {
        if e.is_java_exception() {
            warn!("{}: Java exception pending, returning to caller", entry);
        } else {
            error!("{} failed: {}", entry, e);
        }
    }
}
