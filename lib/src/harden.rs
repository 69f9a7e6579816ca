//! Reset inherited process state before the handoff.

use std::ops::Range;
use std::os::fd::RawFd;

use nix::sys::resource::{getrlimit, rlim_t, Resource, RLIM_INFINITY};
use nix::sys::stat::{umask, Mode};

use crate::{LaunchError, PrivilegesDropped};

/// Descriptors at or above this are never touched, however high the limit.
pub const FD_CEILING: RawFd = 4096;

/// Proof that [`harden`] completed; required to exec.
#[derive(Debug)]
#[must_use]
pub struct Hardened {
    _private: (),
}

/// The descriptors to close for a given hard `RLIMIT_NOFILE`.
///
/// Standard streams are always excluded; an unlimited or huge limit is
/// capped at [`FD_CEILING`].
pub fn inherited_descriptors(hard_limit: rlim_t) -> Range<RawFd> {
    let end = if hard_limit == RLIM_INFINITY || hard_limit > FD_CEILING as rlim_t {
        FD_CEILING
    } else {
        hard_limit as RawFd
    };
    3..end
}

/// Close inherited descriptors, set the umask to 022 and move to `/`.
pub fn harden(_: PrivilegesDropped) -> Result<Hardened, LaunchError> {
    let (_, hard) = getrlimit(Resource::RLIMIT_NOFILE)
        .map_err(LaunchError::resource("determine file descriptor limits"))?;
    let fds = inherited_descriptors(hard);
    tracing::debug!("Closing descriptors {fds:?}");
    for fd in fds {
        // EBADF for descriptors that were never open is expected
        let _ = nix::unistd::close(fd);
    }
    let _ = umask(Mode::S_IWGRP | Mode::S_IWOTH);
    rustix::process::chdir("/").map_err(LaunchError::filesystem("change working directory"))?;
    Ok(Hardened { _private: () })
}
