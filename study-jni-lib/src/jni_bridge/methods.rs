//! Calling Java instance and static methods from native code.

use jni::objects::{JObject, JString, JValue};
use jni::JNIEnv;
use log::debug;

use super::types::config;
use super::{read_string, report};
use crate::descriptors::{
    ADD, GET_AGE, GET_NAME, SET_AGE, SET_NAME, SHOW_INFO, SHOW_STRING, TO_STRING,
};
use crate::error::Result;

const SHOW_STRING_TEXT: &str = "逅lee懈";
const SHOW_STRING_VALUE: i32 = 9527;
const STUDENT_NAME: &str = "kobe";
const STUDENT_AGE: i32 = 41;
const STUDENT_INFO: &str = "像我这样优秀的人";

/// JNI: `void callAddMethod()`
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_callAddMethod(
    mut env: JNIEnv,
    this: JObject,
) {
    report("callAddMethod", call_add_method(&mut env, &this));
}

fn call_add_method(env: &mut JNIEnv, this: &JObject) -> Result<()> {
    let sum = env
        .call_method(this, ADD.name, ADD.sig, &[JValue::Int(2), JValue::Int(6)])?
        .i()?;
    debug!("add(2, 6) = {}", sum);

    let text = env.new_string(SHOW_STRING_TEXT)?;
    let shown = env
        .call_method(
            this,
            SHOW_STRING.name,
            SHOW_STRING.sig,
            &[JValue::Object(&text), JValue::Int(SHOW_STRING_VALUE)],
        )?
        .l()?;
    let shown = JString::from(shown);
    debug!("showString returned {}", read_string(env, &shown)?);

    env.delete_local_ref(text)?;
    env.delete_local_ref(shown)?;
    Ok(())
}

/// JNI: `void putStudent(Student student, String str)`
#[no_mangle]
pub extern "system" fn Java_com_sawyer_studyjni_MainActivity_putStudent(
    mut env: JNIEnv,
    _this: JObject,
    student: JObject,
    text: JString,
) {
    report("putStudent", put_student(&mut env, &student, &text));
}

fn put_student(env: &mut JNIEnv, student: &JObject, text: &JString) -> Result<()> {
    debug!("putStudent: str = {}", read_string(env, text)?);

    let student_class = env.find_class(&config().classes.student)?;

    let described = JString::from(
        env.call_method(student, TO_STRING.name, TO_STRING.sig, &[])?
            .l()?,
    );
    debug!("student.toString() = {}", read_string(env, &described)?);

    let name = env.new_string(STUDENT_NAME)?;
    env.call_method(student, SET_NAME.name, SET_NAME.sig, &[JValue::Object(&name)])?;
    let read_back = JString::from(
        env.call_method(student, GET_NAME.name, GET_NAME.sig, &[])?
            .l()?,
    );
    debug!("student.getName() = {}", read_string(env, &read_back)?);

    env.call_method(student, SET_AGE.name, SET_AGE.sig, &[JValue::Int(STUDENT_AGE)])?;
    let age = env
        .call_method(student, GET_AGE.name, GET_AGE.sig, &[])?
        .i()?;
    debug!("student.getAge() = {}", age);

    let info = env.new_string(STUDENT_INFO)?;
    env.call_static_method(
        &student_class,
        SHOW_INFO.name,
        SHOW_INFO.sig,
        &[JValue::Object(&info)],
    )?;

    env.delete_local_ref(described)?;
    env.delete_local_ref(name)?;
    env.delete_local_ref(read_back)?;
    env.delete_local_ref(info)?;
    env.delete_local_ref(student_class)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jni_bridge::test_vm::{attach, env_arg, new_instance, obj_arg};
    use crate::jni_bridge::MAIN_ACTIVITY;

    const STUDENT: &str = "com/sawyer/studyjni/Student";

    fn string_field(env: &mut JNIEnv, obj: &JObject, name: &str) -> String {
        let value = env
            .get_field(obj, name, "Ljava/lang/String;")
            .unwrap()
            .l()
            .unwrap();
        read_string(env, &JString::from(value)).unwrap()
    }

    #[test]
    fn call_add_method_calls_show_string() {
        let mut env = attach();
        let activity = new_instance(&mut env, MAIN_ACTIVITY);

        Java_com_sawyer_studyjni_MainActivity_callAddMethod(env_arg(&env), obj_arg(&activity));

        assert!(!env.exception_check().unwrap());
        assert_eq!(string_field(&mut env, &activity, "lastShown"), "逅lee懈_9527");
    }

    #[test]
    fn put_student_rewrites_student_and_shows_info() {
        let mut env = attach();
        let activity = new_instance(&mut env, MAIN_ACTIVITY);
        let student = new_instance(&mut env, STUDENT);
        let text = env.new_string("hello student").unwrap();

        Java_com_sawyer_studyjni_MainActivity_putStudent(
            env_arg(&env),
            obj_arg(&activity),
            obj_arg(&student),
            JString::from(obj_arg(&text)),
        );

        assert!(!env.exception_check().unwrap());
        assert_eq!(string_field(&mut env, &student, "name"), STUDENT_NAME);
        let age = env.get_field(&student, "age", "I").unwrap().i().unwrap();
        assert_eq!(age, STUDENT_AGE);

        let info = env
            .get_static_field(STUDENT, "lastInfo", "Ljava/lang/String;")
            .unwrap()
            .l()
            .unwrap();
        assert_eq!(
            read_string(&mut env, &JString::from(info)).unwrap(),
            "像我这样优秀的人"
        );
    }
}
