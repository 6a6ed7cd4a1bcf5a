//! Native side of the `com.sawyer.studyjni` sample app.
//!
//! Loaded by `System.loadLibrary("study_jni")`. The JNI entry points live in
//! [`jni_bridge`]; the other modules hold the parts that do not need a VM.

pub mod descriptors;
pub mod error;
pub mod mangle;
pub mod probe;
pub mod ref_slot;
pub mod types;
pub mod worker;

pub mod jni_bridge;
