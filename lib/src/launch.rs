//! Run the stages in order, exactly once.

use std::convert::Infallible;
use std::ffi::OsString;

use crate::{
    build_argv, drop_privileges, exec, harden, EnvironmentSet, Identity, LaunchError, Variant,
};

/// Run the whole pipeline for `variant` with the launcher's own arguments
/// (excluding the program name).
///
/// Identity, arguments and environment are settled before anything about
/// the process is changed, so a usage error leaves the caller's privileges
/// and descriptors untouched.
pub fn run(variant: &Variant, args: &[OsString]) -> Result<Infallible, LaunchError> {
    let identity = Identity::resolve()?;
    tracing::debug!(
        "{}: target uid={} gid={}",
        variant.name,
        identity.uid(),
        identity.gid()
    );
    let argv = build_argv(variant, args)?;
    let env = EnvironmentSet::build(&identity, variant.forwarded_env, |k| std::env::var_os(k))?;
    let dropped = drop_privileges(&identity)?;
    let hardened = harden(dropped)?;
    exec(hardened, &variant.target, argv, env)
}

/// Process entrypoint: set up logging, run, and exit 1 with a diagnostic
/// if any stage fails.
pub fn launch(variant: &Variant) -> ! {
    update_launcher_utils::initialize_tracing();
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    match run(variant, &args) {
        Ok(never) => match never {},
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1)
        }
    }
}
