//! Local vs. global references.
//!
//! A `jclass` from `FindClass` is a local reference and dies when the native
//! call returns. Caching it in a static only works after promoting it with
//! `NewGlobalRef`; the promoted reference stays valid until released.

use jni::objects::{GlobalRef, JClass, JObject, JValue};
use jni::JNIEnv;
use log::debug;

use super::report;
use super::types::{config, DOG_CLASS};
use crate::descriptors::{CTOR_NO_ARGS, CTOR_ONE_INT, CTOR_TWO_INTS};
use crate::error::Result;

/// JNI: `void testQuote()`
///
/// Caches the `Dog` class as a global reference on first use and constructs
/// one dog with each constructor.
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_testQuote(
    mut env: JNIEnv,
    _this: JObject,
) {
    report("testQuote", test_quote(&mut env));
}

fn test_quote(env: &mut JNIEnv) -> Result<()> {
    if DOG_CLASS.is_set() {
        debug!("testQuote: reusing the cached Dog class");
    }
    let dog_class = DOG_CLASS.get_or_try_init(|| -> Result<GlobalRef> {
        let local = env.find_class(&config().classes.dog)?;
        let global = env.new_global_ref(&local)?;
        env.delete_local_ref(local)?;
        debug!("testQuote: promoted Dog class to a global reference");
        Ok(global)
    })?;
    let class: &JClass = dog_class.as_obj().into();

    let dogs = [
        env.new_object(class, CTOR_NO_ARGS, &[])?,
        env.new_object(class, CTOR_ONE_INT, &[JValue::Int(666)])?,
        env.new_object(class, CTOR_TWO_INTS, &[JValue::Int(33), JValue::Int(99)])?,
    ];
    debug!("testQuote: constructed {} dogs", dogs.len());

    for dog in dogs {
        env.delete_local_ref(dog)?;
    }
    Ok(())
}

/// JNI: `void deleteQuote()`
///
/// Releases the cached `Dog` class. Safe to call any number of times.
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_deleteQuote(
    _env: JNIEnv,
    _this: JObject,
) {
    match DOG_CLASS.take() {
        Some(global) => {
            // Deleted now unless a concurrent testQuote still holds a clone;
            // then it goes when that clone drops.
            drop(global);
            debug!("deleteQuote: released the global Dog class reference");
        }
        None => debug!("deleteQuote: global Dog class reference already released"),
    }
}
