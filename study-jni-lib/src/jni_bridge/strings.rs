use std::ptr;

use jni::objects::JObject;
use jni::sys::jstring;
use jni::JNIEnv;
use log::error;

const GREETING: &str = "sawyer say hello from C++ ";

/// JNI: `String stringFromJNI()`
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_stringFromJNI(
    env: JNIEnv,
    _this: JObject,
) -> jstring {
    match env.new_string(GREETING) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            error!("Failed to create JString: {}", e);
            ptr::null_mut()
        }
    }
}
