//! Symbol names for statically bound native methods.
//!
//! The VM looks up `Java_<class>_<method>` (and, for overloads,
//! `Java_<class>_<method>__<args>`) in the loaded library. Class separators
//! become `_`, and characters that cannot appear in a C identifier are
//! escaped:
//!
//! | input          | output   |
//! |----------------|----------|
//! | `/`            | `_`      |
//! | `_`            | `_1`     |
//! | `;`            | `_2`     |
//! | `[`            | `_3`     |
//! | other (UTF-16) | `_0xxxx` |

use std::fmt::Write;

use crate::error::{Error, Result};

/// Short form: `Java_` + class + `_` + method.
pub fn short_name(class: &str, method: &str) -> String {
    let mut out = String::from("Java_");
    escape_into(&mut out, class);
    out.push('_');
    escape_into(&mut out, method);
    out
}

/// Long form used to disambiguate overloaded natives: the short name followed
/// by `__` and the escaped argument part of `sig`.
pub fn long_name(class: &str, method: &str, sig: &str) -> Result<String> {
    let args = sig
        .strip_prefix('(')
        .and_then(|rest| rest.split_once(')'))
        .map(|(args, _ret)| args)
        .ok_or_else(|| Error::runtime(format!("malformed method descriptor `{}`", sig)))?;

    let mut out = short_name(class, method);
    out.push_str("__");
    escape_into(&mut out, args);
    Ok(out)
}

fn escape_into(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '/' => out.push('_'),
            '_' => out.push_str("_1"),
            ';' => out.push_str("_2"),
            '[' => out.push_str("_3"),
            c if c.is_ascii_alphanumeric() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // Writing into a String cannot fail.
                    let _ = write!(out, "_0{:04x}", unit);
                }
            }
        }
    }
}
