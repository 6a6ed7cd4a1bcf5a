//! Instance and static field access on `MainActivity`.

use jni::objects::{JClass, JObject, JValue};
use jni::JNIEnv;
use log::debug;

use super::report;
use crate::descriptors::{AGE_FIELD, NAME_FIELD, NUM_FIELD};
use crate::error::Result;

const NEW_NAME: &str = "sawyer";
const NEW_NUM: f64 = 99.999;

/// JNI: `void changeName()`, sets `this.name`.
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_changeName(
    mut env: JNIEnv,
    this: JObject,
) {
    report("changeName", change_name(&mut env, &this));
}

fn change_name(env: &mut JNIEnv, this: &JObject) -> Result<()> {
    let value = env.new_string(NEW_NAME)?;
    env.set_field(this, NAME_FIELD.name, NAME_FIELD.sig, JValue::Object(&value))?;
    env.delete_local_ref(value)?;
    Ok(())
}

/// JNI: `static void changeAge()`, increments `MainActivity.age`. Wraps at
/// `i32::MAX` the way Java `int` arithmetic does.
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_changeAge(
    mut env: JNIEnv,
    class: JClass,
) {
    report("changeAge", change_age(&mut env, &class));
}

fn change_age(env: &mut JNIEnv, class: &JClass) -> Result<()> {
    let age = env
        .get_static_field(class, AGE_FIELD.name, AGE_FIELD.sig)?
        .i()?;
    let next = age.wrapping_add(1);
    env.set_static_field(
        class,
        (class, AGE_FIELD.name, AGE_FIELD.sig),
        JValue::Int(next),
    )?;
    debug!("changeAge: {} -> {}", age, next);
    Ok(())
}

/// JNI: `void changeNum()`. `num` is `final` in Java; JNI writes it anyway.
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_changeNum(
    mut env: JNIEnv,
    this: JObject,
) {
    report("changeNum", change_num(&mut env, &this));
}

fn change_num(env: &mut JNIEnv, this: &JObject) -> Result<()> {
    env.set_field(this, NUM_FIELD.name, NUM_FIELD.sig, JValue::Double(NEW_NUM))?;
    let result = env.get_field(this, NUM_FIELD.name, NUM_FIELD.sig)?.d()?;
    debug!("changeNum: final num now reads {}", result);
    Ok(())
}
