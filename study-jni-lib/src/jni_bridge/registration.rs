//! Natives bound at load time through `RegisterNatives`.
//!
//! These functions are not exported; the VM only learns about them from the
//! table passed in `register_dynamic_methods`.

use std::ffi::c_void;

use jni::objects::{JObject, JString};
use jni::sys::jint;
use jni::{JNIEnv, NativeMethod};
use log::{debug, info};

use super::{read_string, report};
use crate::descriptors::{Member, DYNAMIC_METHOD_01, DYNAMIC_METHOD_02};
use crate::error::Result;

/// Value `dynamicJavaMethod02` hands back to Java.
const METHOD_02_RESULT: jint = 6;

fn native_method(member: Member, fn_ptr: *mut c_void) -> NativeMethod {
    NativeMethod {
        name: member.name.into(),
        sig: member.sig.into(),
        fn_ptr,
    }
}

pub(crate) fn register_dynamic_methods(env: &mut JNIEnv, class_name: &str) -> Result<()> {
    let class = env.find_class(class_name)?;
    let methods = [
        native_method(DYNAMIC_METHOD_01, dynamic_java_method01 as *mut c_void),
        native_method(DYNAMIC_METHOD_02, dynamic_java_method02 as *mut c_void),
    ];
    env.register_native_methods(&class, &methods)?;
    env.delete_local_ref(class)?;

    info!("Registered {} dynamic natives on {}", methods.len(), class_name);
    Ok(())
}

/// `void dynamicJavaMethod01()`
extern "system" fn dynamic_java_method01(_env: JNIEnv, _this: JObject) {
    debug!("dynamicJavaMethod01: dynamically registered native ran");
}

/// `int dynamicJavaMethod02(String)`; returns -1 if the argument is unreadable.
extern "system" fn dynamic_java_method02(mut env: JNIEnv, _this: JObject, text: JString) -> jint {
    match read_string(&mut env, &text) {
        Ok(text) => {
            debug!("dynamicJavaMethod02: Java passed {:?}", text);
            METHOD_02_RESULT
        }
        Err(e) => {
            report("dynamicJavaMethod02", Err(e));
            -1
        }
    }
}

#[cfg(test)]
mod tests {
    use jni::objects::JValue;

    use super::*;
    use crate::descriptors::{DYNAMIC_METHOD_01, DYNAMIC_METHOD_02};
    use crate::jni_bridge::test_vm::{attach, new_instance};
    use crate::jni_bridge::MAIN_ACTIVITY;

    #[test]
    fn registered_natives_are_callable_from_java() {
        let mut env = attach();
        let activity = new_instance(&mut env, MAIN_ACTIVITY);

        env.call_method(&activity, DYNAMIC_METHOD_01.name, DYNAMIC_METHOD_01.sig, &[])
            .unwrap();
        let text = env.new_string("dynamic").unwrap();
        let result = env
            .call_method(
                &activity,
                DYNAMIC_METHOD_02.name,
                DYNAMIC_METHOD_02.sig,
                &[JValue::Object(&text)],
            )
            .unwrap()
            .i()
            .unwrap();
        assert_eq!(result, METHOD_02_RESULT);
    }

    #[test]
    fn registering_again_rebinds() {
        let mut env = attach();
        register_dynamic_methods(&mut env, MAIN_ACTIVITY).unwrap();
    }

    #[test]
    fn registering_on_missing_class_fails() {
        let mut env = attach();
        let err = register_dynamic_methods(&mut env, "com/sawyer/studyjni/Missing").unwrap_err();
        assert!(err.is_java_exception());
        env.exception_clear().unwrap();
    }
}
