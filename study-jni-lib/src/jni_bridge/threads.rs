//! Calling back into Java from a native thread.

use jni::objects::{GlobalRef, JObject};
use jni::{JNIEnv, JavaVM};
use log::{debug, warn};

use super::report;
use super::types::java_vm;
use crate::descriptors::UPDATE_ACTIVITY_UI;
use crate::error::{Error, Result};
use crate::worker::{spawn_joined, WORKERS};

const WORKER_NAME: &str = "study-jni-worker";

/// JNI: `void nativeThread()`
///
/// Spawns a native thread that calls `updateActivityUI()` on this activity
/// and waits for it. The `JNIEnv` and `this` of the current call stay on this
/// thread; the worker gets a global reference and attaches on its own.
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_nativeThread(
    mut env: JNIEnv,
    this: JObject,
) {
    report("nativeThread", native_thread(&mut env, &this));
}

fn native_thread(env: &mut JNIEnv, this: &JObject) -> Result<()> {
    let vm = java_vm()?;
    let activity = env.new_global_ref(this)?;

    let for_worker = activity.clone();
    spawn_joined(&WORKERS, WORKER_NAME, move || {
        call_update_activity_ui(vm, &for_worker)
    })??;

    // Last clone: the global reference is deleted here, after the join.
    drop(activity);
    Ok(())
}

fn call_update_activity_ui(vm: &JavaVM, activity: &GlobalRef) -> Result<()> {
    // Detaches when `env` drops.
    let mut env = vm.attach_current_thread().map_err(Error::attach)?;
    let called = env.call_method(
        activity,
        UPDATE_ACTIVITY_UI.name,
        UPDATE_ACTIVITY_UI.sig,
        &[],
    );
    if let Err(e) = called {
        // No Java frame above this thread to receive the exception; it must
        // be cleared before the thread detaches.
        if env.exception_check()? {
            warn!("{}: updateActivityUI threw", WORKER_NAME);
            env.exception_describe()?;
            env.exception_clear()?;
            return Err(Error::runtime("updateActivityUI threw on the worker thread"));
        }
        return Err(e.into());
    }
    debug!("{}: updateActivityUI returned", WORKER_NAME);
    Ok(())
}

/// JNI: `void closeThread()`
///
/// Worker state is owned by `nativeThread`'s scope, so nothing is left to
/// free; reports how many native workers are still running.
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_closeThread(
    _env: JNIEnv,
    _this: JObject,
) {
    debug!("closeThread: {} native workers alive", WORKERS.alive());
}
