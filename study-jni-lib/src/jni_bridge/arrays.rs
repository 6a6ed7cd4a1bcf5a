//! Primitive and object array marshaling.

use jni::objects::{JIntArray, JObject, JObjectArray, JString, ReleaseMode};
use jni::JNIEnv;
use log::debug;

use super::{read_string, report};
use crate::error::Result;

const REPLACEMENT: &str = "hello item";

/// JNI: `void testArrayAction(int[] intArray, String[] strArray)`
///
/// Logs the ints and overwrites every string slot; the caller sees the new
/// strings after return.
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_testArrayAction(
    mut env: JNIEnv,
    _this: JObject,
    int_array: JIntArray,
    str_array: JObjectArray,
) {
    report(
        "testArrayAction",
        test_array_action(&mut env, &int_array, &str_array),
    );
}

fn test_array_action(env: &mut JNIEnv, ints: &JIntArray, strings: &JObjectArray) -> Result<()> {
    log_ints(env, ints)?;
    replace_strings(env, strings)
}

fn log_ints(env: &mut JNIEnv, ints: &JIntArray) -> Result<()> {
    let len = env.get_array_length(ints)?;
    // SAFETY: the array is not accessed through any other path while pinned,
    // and the elements are released (copied back) when `elements` drops.
    let elements = unsafe { env.get_array_elements(ints, ReleaseMode::CopyBack)? };
    for (i, item) in elements.iter().enumerate() {
        debug!("int[{}/{}] = {}", i, len, item);
    }
    Ok(())
}

fn replace_strings(env: &mut JNIEnv, strings: &JObjectArray) -> Result<()> {
    let len = env.get_array_length(strings)?;
    for i in 0..len {
        let before = JString::from(env.get_object_array_element(strings, i)?);
        debug!("str[{}] before: {}", i, read_string(env, &before)?);
        env.delete_local_ref(before)?;

        let replacement = env.new_string(REPLACEMENT)?;
        env.set_object_array_element(strings, i, &replacement)?;
        env.delete_local_ref(replacement)?;

        let after = JString::from(env.get_object_array_element(strings, i)?);
        debug!("str[{}] after: {}", i, read_string(env, &after)?);
        env.delete_local_ref(after)?;
    }
    Ok(())
}
