//! Resolve the account we drop to.

use std::io;
use std::path::{Path, PathBuf};

use nix::unistd::{Gid, Uid, User};

use crate::LaunchError;

/// The unprivileged account the target program runs as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    uid: Uid,
    gid: Gid,
    home: PathBuf,
}

impl Identity {
    /// Look up the account database entry for the effective uid.
    pub fn resolve() -> Result<Self, LaunchError> {
        Self::for_uid(nix::unistd::geteuid())
    }

    /// Look up the account database entry for `uid`.
    pub fn for_uid(uid: Uid) -> Result<Self, LaunchError> {
        let source = match User::from_uid(uid) {
            Ok(Some(user)) => {
                return Ok(Self {
                    uid: user.uid,
                    gid: user.gid,
                    home: user.dir,
                })
            }
            Ok(None) => io::Error::new(io::ErrorKind::NotFound, "no such account"),
            Err(e) => e.into(),
        };
        Err(LaunchError::Identity {
            uid: uid.as_raw(),
            source,
        })
    }

    /// Build an identity without consulting the account database.
    pub fn new(uid: Uid, gid: Gid, home: impl Into<PathBuf>) -> Self {
        Self {
            uid,
            gid,
            home: home.into(),
        }
    }

    /// The user id.
    pub fn uid(&self) -> Uid {
        self.uid
    }

    /// The primary group id.
    pub fn gid(&self) -> Gid {
        self.gid
    }

    /// The home directory, exported as `HOME`.
    pub fn home(&self) -> &Path {
        &self.home
    }
}
