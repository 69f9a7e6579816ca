//! Irrevocably switch to the target identity.
//!
//! The order is load-bearing: supplementary groups and the gid can only be
//! changed while we still hold root, so the uid goes last. Every step
//! either succeeds or ends the process, so we never continue with the uid
//! dropped but the groups still privileged.

use std::io;

use nix::unistd::{getgroups, getresgid, getresuid, setgroups, setresgid, setresuid};

use crate::{Identity, LaunchError};

/// Proof that [`drop_privileges`] completed; required to harden the process.
#[derive(Debug)]
#[must_use]
pub struct PrivilegesDropped {
    _private: (),
}

/// Clear supplementary groups, then set gid, then set uid.
///
/// Real, effective and saved ids are all set, so the saved set-user-ID
/// cannot be used to switch back.
pub fn drop_privileges(identity: &Identity) -> Result<PrivilegesDropped, LaunchError> {
    let (uid, gid) = (identity.uid(), identity.gid());
    setgroups(&[]).map_err(LaunchError::privilege("set supplementary groups IDs"))?;
    setresgid(gid, gid, gid).map_err(LaunchError::privilege("set real and effective gid"))?;
    setresuid(uid, uid, uid).map_err(LaunchError::privilege("set real and effective uid"))?;
    verify(identity)?;
    tracing::debug!("Dropped privileges to uid={uid} gid={gid}");
    Ok(PrivilegesDropped { _private: () })
}

/// Read the credentials back and insist they match exactly.
fn verify(identity: &Identity) -> Result<(), LaunchError> {
    const OP: &str = "verify dropped credentials";
    let uids = getresuid().map_err(LaunchError::privilege(OP))?;
    let gids = getresgid().map_err(LaunchError::privilege(OP))?;
    let groups = getgroups().map_err(LaunchError::privilege(OP))?;
    let (uid, gid) = (identity.uid(), identity.gid());
    let mismatch = if [uids.real, uids.effective, uids.saved] != [uid; 3] {
        Some(format!(
            "uids are {}/{}/{}, expected {uid}",
            uids.real, uids.effective, uids.saved
        ))
    } else if [gids.real, gids.effective, gids.saved] != [gid; 3] {
        Some(format!(
            "gids are {}/{}/{}, expected {gid}",
            gids.real, gids.effective, gids.saved
        ))
    } else if !groups.is_empty() {
        Some(format!("{} supplementary groups remain", groups.len()))
    } else {
        None
    };
    match mismatch {
        Some(msg) => Err(LaunchError::privilege(OP)(io::Error::other(msg))),
        None => Ok(()),
    }
}
