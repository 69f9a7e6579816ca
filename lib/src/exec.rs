//! Replace the process image with the target program.

use std::convert::Infallible;
use std::ffi::OsString;
use std::os::unix::process::CommandExt;
use std::process::Command;

use update_launcher_utils::Bounded;

use crate::{EnvironmentSet, Hardened, LaunchError, TargetDescriptor};

/// Hand off to `target`. Returns only on failure.
pub fn exec(
    _: Hardened,
    target: &TargetDescriptor,
    argv: Bounded<OsString>,
    env: EnvironmentSet,
) -> Result<Infallible, LaunchError> {
    tracing::debug!("Executing {}", target.path);
    let mut cmd = Command::new(target.path);
    cmd.args(argv.as_slice()).env_clear().envs(env.iter());
    Err(LaunchError::Exec {
        path: target.path.into(),
        source: cmd.exec(),
    })
}
