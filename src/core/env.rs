//! Environment snapshot construction.
//!
//! The snapshot is an ordered list of `NAME=VALUE` entries. Host entries are
//! kept as raw OS strings so bytes that aren't UTF-8 reach the target
//! untouched. Resolved parameters are appended after the host environment
//! without deduplication; consumers take the last occurrence of a name. So a
//! store value shadows a host variable, a secret shadows a prefix parameter,
//! and a later prefix or secret shadows an earlier one.

use std::ffi::{OsStr, OsString};

use crate::core::resolver::ResolvedParameter;

/// Snapshot the current process environment as `NAME=VALUE` entries.
pub fn host_environment() -> Vec<OsString> {
    std::env::vars_os().map(|(k, v)| entry(&k, &v)).collect()
}

/// Join a name and value into a single entry.
pub fn entry(name: &OsStr, value: &OsStr) -> OsString {
    let mut e = OsString::with_capacity(name.len() + value.len() + 1);
    e.push(name);
    e.push("=");
    e.push(value);
    e
}

/// Append resolved parameters to `host`, preserving order.
pub fn build(mut host: Vec<OsString>, resolved: &[ResolvedParameter]) -> Vec<OsString> {
    host.reserve(resolved.len());
    host.extend(
        resolved
            .iter()
            .map(|p| entry(OsStr::new(&p.name), OsStr::new(&p.value))),
    );
    host
}

/// Split an entry at its first `=`. Entries without one are ignored.
#[cfg(unix)]
pub fn split_entry(entry: &OsStr) -> Option<(&OsStr, &OsStr)> {
    use std::os::unix::ffi::OsStrExt;

    let bytes = entry.as_bytes();
    let at = bytes.iter().position(|b| *b == b'=')?;
    Some((
        OsStr::from_bytes(&bytes[..at]),
        OsStr::from_bytes(&bytes[at + 1..]),
    ))
}

#[cfg(not(unix))]
pub fn split_entry(entry: &OsStr) -> Option<(&OsStr, &OsStr)> {
    let (name, value) = entry.to_str()?.split_once('=')?;
    Some((OsStr::new(name), OsStr::new(value)))
}

/// Value of the last entry named `name`.
pub fn lookup<'a>(env: &'a [OsString], name: &str) -> Option<&'a OsStr> {
    env.iter()
        .rev()
        .filter_map(|e| split_entry(e))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}
