//! Library load: logger, config, static export check and dynamic registration.

use std::ffi::c_void;

use jni::sys::{jint, JNI_ERR, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use log::{debug, error, info, warn, LevelFilter};

use super::registration::register_dynamic_methods;
use super::types::{CONFIG, JAVA_VM};
use super::{MAIN_ACTIVITY, STATIC_EXPORTS};
use crate::error::{Error, Result};
use crate::mangle::{long_name, short_name};
use crate::types::{LogConfig, StudyConfig};

/// JNI: called by the VM when `System.loadLibrary("study_jni")` loads us.
///
/// Stores the JavaVM for later attachment from native threads, then binds
/// `dynamicJavaMethod01`/`dynamicJavaMethod02` on `MainActivity`.
/// Returns `JNI_ERR` if no JNI 1.6 environment is available.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    // SAFETY: the VM passes a valid JavaVM pointer to JNI_OnLoad.
    let vm = match unsafe { JavaVM::from_raw(vm) } {
        Ok(vm) => vm,
        Err(e) => {
            eprintln!("JNI_OnLoad received an invalid JavaVM: {}", e);
            return JNI_ERR;
        }
    };

    let (config, rejected) = match StudyConfig::embedded() {
        Ok(config) => (config, None),
        Err(e) => (StudyConfig::default(), Some(e)),
    };
    init_logger(&config.log);
    if let Some(e) = rejected {
        error!("Embedded config rejected, using defaults: {}", e);
    }
    let config = CONFIG.get_or_init(|| config);

    if JAVA_VM.set(vm).is_err() {
        warn!("JNI_OnLoad called twice, keeping the first JavaVM");
    }
    let Some(vm) = JAVA_VM.get() else {
        return JNI_ERR;
    };

    let mut env = match vm.get_env() {
        Ok(env) => env,
        Err(e) => {
            error!("Failed to get JNIEnv: {}", e);
            return JNI_ERR;
        }
    };

    if let Err(e) = on_load(&mut env, config) {
        error!("JNI_OnLoad failed: {}", e);
        return JNI_ERR;
    }

    info!("study_jni loaded");
    JNI_VERSION_1_6
}

fn on_load(env: &mut JNIEnv, config: &StudyConfig) -> Result<()> {
    let version = jint::from(env.get_version()?);
    if version < JNI_VERSION_1_6 {
        return Err(Error::runtime(format!(
            "JNI version {:#x} is older than 1.6",
            version
        )));
    }

    log_static_exports(&config.classes.main_activity);
    register_dynamic_methods(env, &config.classes.main_activity)
}

fn log_static_exports(main_activity: &str) {
    for export in STATIC_EXPORTS {
        let symbol = short_name(export.class, export.method);
        match long_name(export.class, export.method, export.sig) {
            Ok(overloaded) => debug!(
                "static export {} (or {}) -> {}.{}{}",
                symbol, overloaded, export.class, export.method, export.sig
            ),
            Err(e) => warn!("static export {}: {}", symbol, e),
        }
    }
    if main_activity != MAIN_ACTIVITY {
        warn!(
            "Configured main activity {} differs from {}; symbol-bound natives will not resolve",
            main_activity, MAIN_ACTIVITY
        );
    }
}

fn init_logger(log: &LogConfig) {
    let level = log.level_filter().unwrap_or(LevelFilter::Debug);

    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag(log.tag.clone()),
    );

    #[cfg(not(target_os = "android"))]
    {
        // A host process may already own the logger.
        let _ = env_logger::Builder::new().filter_level(level).try_init();
    }

    debug!("Logger initialized at {} with tag {}", level, log.tag);
}
