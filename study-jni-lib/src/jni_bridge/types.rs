//! Global state shared by the JNI entry points.

use std::sync::OnceLock;

use jni::objects::GlobalRef;
use jni::JavaVM;

use crate::error::{Error, Result};
use crate::ref_slot::RefSlot;
use crate::types::StudyConfig;

/// JavaVM handed to `JNI_OnLoad`. Set once, never cleared.
pub static JAVA_VM: OnceLock<JavaVM> = OnceLock::new();

/// Active configuration, parsed in `JNI_OnLoad`.
pub static CONFIG: OnceLock<StudyConfig> = OnceLock::new();

/// `Dog` class promoted to a global reference by `testQuote`, released by
/// `deleteQuote`.
pub static DOG_CLASS: RefSlot<GlobalRef> = RefSlot::new();

pub fn java_vm() -> Result<&'static JavaVM> {
    JAVA_VM.get().ok_or(Error::VmNotLoaded)
}

/// Address of the load-time VM, for address reports.
pub fn onload_vm_addr() -> Option<usize> {
    JAVA_VM.get().map(|vm| vm.get_java_vm_pointer() as usize)
}

pub fn config() -> &'static StudyConfig {
    CONFIG.get_or_init(StudyConfig::default)
}
