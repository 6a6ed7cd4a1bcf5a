//! JNIEnv and JavaVM identity across calls, receivers and threads.
//!
//! Every call on one thread sees the same `JNIEnv`; other threads (Java or
//! native) see their own. The `JavaVM` is the same process-wide.

use jni::objects::{JClass, JObject};
use jni::{JNIEnv, JavaVM};
use log::{debug, error};

use super::report;
use super::types::{java_vm, onload_vm_addr};
use crate::error::{Error, Result};
use crate::probe::EnvProbe;
use crate::worker::{spawn_detached, WORKERS};

fn probe(env: &JNIEnv, label: &'static str, receiver: &JObject) -> Result<EnvProbe> {
    let vm = env.get_java_vm()?;
    Ok(EnvProbe {
        label,
        env: env.get_raw() as usize,
        vm: vm.get_java_vm_pointer() as usize,
        receiver: Some(receiver.as_raw() as usize),
        onload_vm: onload_vm_addr(),
    })
}

fn log_probe(env: &JNIEnv, label: &'static str, receiver: &JObject) -> Result<()> {
    let probe = probe(env, label, receiver)?;
    debug!("{}", probe);
    if !probe.shares_vm() {
        debug!("{}: JavaVM differs from the one stored at load", label);
    }
    Ok(())
}

/// JNI: `void nativeFun1()`
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_nativeFun1(env: JNIEnv, this: JObject) {
    report("nativeFun1", log_probe(&env, "nativeFun1", &this));
}

/// JNI: `void nativeFun2()`
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_nativeFun2(env: JNIEnv, this: JObject) {
    report("nativeFun2", log_probe(&env, "nativeFun2", &this));
}

/// JNI: `static void staticFun3()`
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_staticFun3(env: JNIEnv, class: JClass) {
    report("staticFun3", log_probe(&env, "staticFun3", &class));
}

/// JNI: `static void staticFun4()`
///
/// Also starts a detached native thread that reports its own `JNIEnv`.
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_staticFun4(env: JNIEnv, class: JClass) {
    report("staticFun4", static_fun4(&env, &class));
}

fn static_fun4(env: &JNIEnv, class: &JClass) -> Result<()> {
    log_probe(env, "staticFun4", class)?;
    let vm = java_vm()?;
    spawn_detached(&WORKERS, "study-jni-probe", move || {
        if let Err(e) = probe_native_thread(vm) {
            error!("native thread probe failed: {}", e);
        }
    })
}

fn probe_native_thread(vm: &JavaVM) -> Result<()> {
    let env = vm.attach_current_thread().map_err(Error::attach)?;
    let probe = EnvProbe {
        label: "native thread",
        env: env.get_raw() as usize,
        vm: vm.get_java_vm_pointer() as usize,
        receiver: None,
        onload_vm: onload_vm_addr(),
    };
    debug!("{}", probe);
    Ok(())
}

/// JNI: `SecondActivity.nativeFun5()`
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_SecondActivity_nativeFun5(env: JNIEnv, this: JObject) {
    report("nativeFun5", log_probe(&env, "nativeFun5", &this));
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::jni_bridge::test_vm::{attach, class_arg, env_arg, new_instance, obj_arg};
    use crate::jni_bridge::{MAIN_ACTIVITY, SECOND_ACTIVITY};

    #[test]
    fn calls_on_one_thread_share_env_and_vm() {
        let mut env = attach();
        let activity = new_instance(&mut env, MAIN_ACTIVITY);
        let class = env.find_class(MAIN_ACTIVITY).unwrap();

        let first = probe(&env, "nativeFun1", &activity).unwrap();
        let second = probe(&env, "staticFun3", &class).unwrap();
        assert_eq!(first.env, second.env);
        assert_eq!(first.env, env.get_raw() as usize);
        assert!(first.shares_vm());
        assert_ne!(first.receiver, second.receiver);
    }

    #[test]
    fn other_threads_get_their_own_env() {
        let env = attach();
        let here = env.get_raw() as usize;
        let vm = java_vm().unwrap();

        let there = thread::spawn(move || {
            let env = vm.attach_current_thread().unwrap();
            env.get_raw() as usize
        })
        .join()
        .unwrap();
        assert_ne!(here, there);

        let native = thread::spawn(move || probe_native_thread(vm)).join().unwrap();
        assert!(native.is_ok());
    }

    #[test]
    fn entry_points_run_without_leaving_exceptions() {
        let mut env = attach();
        let activity = new_instance(&mut env, MAIN_ACTIVITY);
        let second = new_instance(&mut env, SECOND_ACTIVITY);
        let class = env.find_class(MAIN_ACTIVITY).unwrap();

        Java_com_sawyer_studyjni_MainActivity_nativeFun1(env_arg(&env), obj_arg(&activity));
        Java_com_sawyer_studyjni_MainActivity_nativeFun2(env_arg(&env), obj_arg(&activity));
        Java_com_sawyer_studyjni_MainActivity_staticFun3(env_arg(&env), class_arg(&class));
        Java_com_sawyer_studyjni_MainActivity_staticFun4(env_arg(&env), class_arg(&class));
        Java_com_sawyer_studyjni_SecondActivity_nativeFun5(env_arg(&env), obj_arg(&second));
        assert!(!env.exception_check().unwrap());
    }
}
