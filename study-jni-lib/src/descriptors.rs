//! Member names and JNI descriptors of the managed side.

/// A field or method: name plus JNI descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub name: &'static str,
    pub sig: &'static str,
}

const fn member(name: &'static str, sig: &'static str) -> Member {
    Member { name, sig }
}

pub const STRING: &str = "Ljava/lang/String;";

// MainActivity
pub const NAME_FIELD: Member = member("name", STRING);
pub const AGE_FIELD: Member = member("age", "I");
pub const NUM_FIELD: Member = member("num", "D");
pub const ADD: Member = member("add", "(II)I");
pub const SHOW_STRING: Member = member("showString", "(Ljava/lang/String;I)Ljava/lang/String;");
pub const UPDATE_ACTIVITY_UI: Member = member("updateActivityUI", "()V");

// Student
pub const TO_STRING: Member = member("toString", "()Ljava/lang/String;");
pub const SET_NAME: Member = member("setName", "(Ljava/lang/String;)V");
pub const GET_NAME: Member = member("getName", "()Ljava/lang/String;");
pub const SET_AGE: Member = member("setAge", "(I)V");
pub const GET_AGE: Member = member("getAge", "()I");
pub const SHOW_INFO: Member = member("showInfo", "(Ljava/lang/String;)V");

// Person, both take a Student; see `setter_descriptor`.
pub const SET_STUDENT: &str = "setStudent";
pub const PUT_STUDENT: &str = "putStudent";

// Dog constructors
pub const CTOR_NO_ARGS: &str = "()V";
pub const CTOR_ONE_INT: &str = "(I)V";
pub const CTOR_TWO_INTS: &str = "(II)V";

// Methods bound through `RegisterNatives` instead of by symbol.
pub const DYNAMIC_METHOD_01: Member = member("dynamicJavaMethod01", "()V");
pub const DYNAMIC_METHOD_02: Member = member("dynamicJavaMethod02", "(Ljava/lang/String;)I");

/// `L<class>;`
pub fn object_descriptor(class: &str) -> String {
    format!("L{};", class)
}

/// `(L<class>;)V`
pub fn setter_descriptor(class: &str) -> String {
    format!("({})V", object_descriptor(class))
}
