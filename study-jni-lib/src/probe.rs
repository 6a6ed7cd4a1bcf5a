//! Address report used to compare `JNIEnv`/`JavaVM` handles across calls and
//! threads.

use std::fmt;

/// Raw handle addresses seen by one native call. `receiver` is the `jobject`
/// or `jclass` argument, absent on native threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvProbe {
    pub label: &'static str,
    pub env: usize,
    pub vm: usize,
    pub receiver: Option<usize>,
    pub onload_vm: Option<usize>,
}

impl EnvProbe {
    /// Whether the VM reached through the env is the one stored at load time.
    pub fn shares_vm(&self) -> bool {
        self.onload_vm == Some(self.vm)
    }
}

impl fmt::Display for EnvProbe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: JNIEnv = {:#x}, JavaVM = {:#x}", self.label, self.env, self.vm)?;
        if let Some(receiver) = self.receiver {
            write!(f, ", receiver = {:#x}", receiver)?;
        }
        match self.onload_vm {
            Some(vm) => write!(f, ", JNI_OnLoad JavaVM = {:#x}", vm),
            None => write!(f, ", JNI_OnLoad JavaVM = <unset>"),
        }
    }
}
