//! One JVM per test process, with the classes under `fixtures/java` on its
//! class path and this library loaded through `JNI_OnLoad`.
//!
//! The fixtures are compiled with `javac` from `$JAVA_HOME/bin` (or `PATH`)
//! into a temporary directory that lives as long as the VM.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::ptr;
use std::sync::OnceLock;

use jni::objects::{JClass, JObject};
use jni::sys::JNI_VERSION_1_6;
use jni::{AttachGuard, InitArgsBuilder, JNIEnv, JNIVersion, JavaVM};
use tempfile::TempDir;

use super::lifecycle::JNI_OnLoad;

struct TestVm {
    vm: JavaVM,
    _classes: TempDir,
}

static TEST_VM: OnceLock<TestVm> = OnceLock::new();

pub(crate) fn vm() -> &'static JavaVM {
    &TEST_VM.get_or_init(start).vm
}

/// Attaches the calling test thread; it detaches again when the guard drops.
pub(crate) fn attach() -> AttachGuard<'static> {
    vm().attach_current_thread().expect("attach test thread")
}

/// A second handle to `env`, for passing to an entry point by value.
pub(crate) fn env_arg<'local>(env: &JNIEnv<'local>) -> JNIEnv<'local> {
    // SAFETY: the clone is only used on this thread, inside the caller's frame.
    unsafe { env.unsafe_clone() }
}

/// A second handle to the same local reference, for passing by value.
pub(crate) fn obj_arg<'local>(obj: &JObject<'local>) -> JObject<'local> {
    // SAFETY: the caller keeps the original alive for the duration of the call.
    unsafe { JObject::from_raw(obj.as_raw()) }
}

pub(crate) fn class_arg<'local>(class: &JClass<'local>) -> JClass<'local> {
    // SAFETY: as for `obj_arg`.
    unsafe { JClass::from_raw(class.as_raw()) }
}

/// A fresh instance of `class`, built with its no-argument constructor.
pub(crate) fn new_instance<'local>(env: &mut JNIEnv<'local>, class: &str) -> JObject<'local> {
    env.new_object(class, "()V", &[]).expect("construct fixture")
}

fn start() -> TestVm {
    let classes = TempDir::new().expect("class output dir");
    compile_fixtures(classes.path());

    let class_path_opt = format!("-Djava.class.path={}", classes.path().display());
    let args = InitArgsBuilder::new()
        .version(JNIVersion::V8)
        .option(class_path_opt.as_str())
        .build()
        .expect("JVM init args");
    let vm = JavaVM::new(args).expect("start JVM");

    {
        let _env = vm.attach_current_thread().expect("attach loader thread");
        assert_eq!(
            JNI_OnLoad(vm.get_java_vm_pointer(), ptr::null_mut()),
            JNI_VERSION_1_6
        );
    }

    TestVm {
        vm,
        _classes: classes,
    }
}

fn compile_fixtures(out: &Path) {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/java/com/sawyer/studyjni");
    let sources: Vec<PathBuf> = fs::read_dir(&src)
        .expect("fixture sources")
        .map(|entry| entry.expect("fixture entry").path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "java"))
        .collect();

    let javac = env::var_os("JAVA_HOME")
        .map(|home| Path::new(&home).join("bin").join("javac"))
        .unwrap_or_else(|| PathBuf::from("javac"));
    let status = Command::new(&javac)
        .arg("-encoding")
        .arg("UTF-8")
        .arg("-d")
        .arg(out)
        .args(&sources)
        .status()
        .unwrap_or_else(|e| panic!("failed to run {}: {}", javac.display(), e));
    assert!(status.success(), "javac failed on {}", src.display());
}
