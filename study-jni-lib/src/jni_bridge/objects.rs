//! Allocating managed objects and wiring them together.

use jni::objects::{JObject, JValue};
use jni::JNIEnv;
use log::debug;

use super::report;
use super::types::config;
use crate::descriptors::{setter_descriptor, PUT_STUDENT, SET_AGE, SET_NAME, SET_STUDENT};
use crate::error::Result;

const STUDENT_NAME: &str = "唐三";
const STUDENT_AGE: i32 = 100;

/// JNI: `void insertObject()`
///
/// Builds a `Person` holding a `Student`. Both are allocated without running
/// a constructor.
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_insertObject(
    mut env: JNIEnv,
    _this: JObject,
) {
    report("insertObject", insert_object(&mut env));
}

fn insert_object(env: &mut JNIEnv) -> Result<()> {
    let classes = &config().classes;

    let person_class = env.find_class(&classes.person)?;
    let person = env.alloc_object(&person_class)?;
    let student_class = env.find_class(&classes.student)?;
    let student = env.alloc_object(&student_class)?;

    let name = env.new_string(STUDENT_NAME)?;
    env.call_method(&student, SET_NAME.name, SET_NAME.sig, &[JValue::Object(&name)])?;
    env.call_method(&student, SET_AGE.name, SET_AGE.sig, &[JValue::Int(STUDENT_AGE)])?;

    let takes_student = setter_descriptor(&classes.student);
    env.call_method(
        &person,
        SET_STUDENT,
        &takes_student,
        &[JValue::Object(&student)],
    )?;
    env.call_static_method(
        &person_class,
        PUT_STUDENT,
        &takes_student,
        &[JValue::Object(&student)],
    )?;
    debug!("insertObject: person now holds {} ({})", STUDENT_NAME, STUDENT_AGE);

    // The VM frees these on return too; deleted here as soon as unused.
    env.delete_local_ref(person_class)?;
    env.delete_local_ref(person)?;
    env.delete_local_ref(student_class)?;
    env.delete_local_ref(student)?;
    env.delete_local_ref(name)?;
    Ok(())
}
