//! Build the environment for the target program from scratch.

use std::ffi::{OsStr, OsString};

use update_launcher_utils::Bounded;

use crate::{Identity, LaunchError};

/// `PATH` given to the target, regardless of the caller's.
pub const SAFE_PATH: &str = "/bin:/usr/bin";

/// The complete environment of the target program, in order.
///
/// Contains `PATH`, `HOME`, and nothing from the caller except names on
/// the variant's allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSet {
    vars: Bounded<(OsString, OsString)>,
}

impl EnvironmentSet {
    /// Build the environment for `identity`, reading allow-listed names
    /// through `lookup` (normally [`std::env::var_os`]).
    pub fn build<F>(identity: &Identity, forwarded: &[&str], lookup: F) -> Result<Self, LaunchError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        const OP: &str = "create environment";
        let mut vars =
            Bounded::with_limit(2 + forwarded.len()).map_err(LaunchError::allocation(OP))?;
        vars.push(("PATH".into(), SAFE_PATH.into()))
            .map_err(LaunchError::allocation(OP))?;
        vars.push(("HOME".into(), identity.home().into()))
            .map_err(LaunchError::allocation(OP))?;
        for &name in forwarded {
            match lookup(name) {
                Some(value) if !value.is_empty() => {
                    tracing::debug!("Forwarding {name}");
                    vars.push((name.into(), value))
                        .map_err(LaunchError::allocation(OP))?;
                }
                _ => {}
            }
        }
        Ok(Self { vars })
    }

    #[cfg(test)]
    fn get(&self, name: &str) -> Option<&OsStr> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// Iterate over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.as_slice().iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use nix::unistd::{Gid, Uid};
    use similar_asserts::assert_eq;

    use super::*;
    use crate::{APT_UPDATE, SMART_UPDATE};

    fn identity() -> Identity {
        Identity::new(Uid::from_raw(1000), Gid::from_raw(1000), "/var/lib/landscape")
    }

    fn caller(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |k| vars.get(k).cloned()
    }

    fn names(env: &EnvironmentSet) -> Vec<String> {
        env.iter()
            .map(|(k, _)| k.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_minimal() {
        let env = EnvironmentSet::build(&identity(), &[], caller(&[("LD_PRELOAD", "/x.so")]))
            .unwrap();
        assert_eq!(names(&env), vec!["PATH", "HOME"]);
        assert_eq!(env.get("PATH"), Some(OsStr::new(SAFE_PATH)));
        assert_eq!(env.get("HOME"), Some(OsStr::new("/var/lib/landscape")));
        assert_eq!(env.get("LD_PRELOAD"), None);
    }

    #[test]
    fn test_forward_set_proxy_only() {
        let lookup = caller(&[("http_proxy", "http://x:8080"), ("PATH", "/tmp/evil")]);
        let env =
            EnvironmentSet::build(&identity(), APT_UPDATE.forwarded_env, lookup).unwrap();
        assert_eq!(names(&env), vec!["PATH", "HOME", "http_proxy"]);
        assert_eq!(env.get("http_proxy"), Some(OsStr::new("http://x:8080")));
        assert_eq!(env.get("https_proxy"), None);
        assert_eq!(env.get("PATH"), Some(OsStr::new(SAFE_PATH)));
    }

    #[test]
    fn test_forward_skips_empty() {
        let lookup = caller(&[("http_proxy", ""), ("https_proxy", "http://y:3128")]);
        let env =
            EnvironmentSet::build(&identity(), APT_UPDATE.forwarded_env, lookup).unwrap();
        assert_eq!(names(&env), vec!["PATH", "HOME", "https_proxy"]);
    }

    #[test]
    fn test_smart_forwards_nothing() {
        let lookup = caller(&[("http_proxy", "http://x:8080"), ("https_proxy", "http://y")]);
        let env =
            EnvironmentSet::build(&identity(), SMART_UPDATE.forwarded_env, lookup).unwrap();
        assert_eq!(names(&env), vec!["PATH", "HOME"]);
    }

    #[test]
    fn test_non_utf8_value_forwarded_verbatim() {
        use std::os::unix::ffi::OsStrExt;
        let raw = OsStr::from_bytes(b"http://\xfe:1").to_owned();
        let env = EnvironmentSet::build(&identity(), &["http_proxy"], move |k| {
            (k == "http_proxy").then(|| raw.clone())
        })
        .unwrap();
        assert_eq!(
            env.get("http_proxy").map(|v| v.as_bytes()),
            Some(&b"http://\xfe:1"[..])
        );
    }
}
