//! Validate the command line and build the target's argument list.

use std::ffi::{OsStr, OsString};

use update_launcher_utils::Bounded;

use crate::{LaunchError, Variant};

/// A deferred-run interval accepted through `--after <N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval(i64);

impl Interval {
    /// Parse a base-10 integer occupying the whole of `s`.
    ///
    /// `0` is a valid interval; only input without a complete number
    /// is rejected.
    pub fn parse(s: &OsStr) -> Result<Self, LaunchError> {
        s.to_str()
            .and_then(|s| s.parse::<i64>().ok())
            .map(Self)
            .ok_or_else(|| LaunchError::Interval {
                value: s.to_string_lossy().into_owned(),
            })
    }

    /// Render as the single argument passed to the target.
    pub fn to_arg(&self) -> OsString {
        format!("--after={}", self.0).into()
    }
}

/// Check the launcher's own arguments (excluding the program name).
///
/// Nothing is accepted unless the variant takes `--after`, in which case
/// exactly the two arguments `--after <N>` are also allowed.
pub fn validate(variant: &Variant, args: &[OsString]) -> Result<Option<Interval>, LaunchError> {
    match args {
        [] => Ok(None),
        [flag, value] if variant.accepts_after && flag == "--after" => {
            Interval::parse(value).map(Some)
        }
        _ => Err(LaunchError::Usage),
    }
}

/// Validate `args` and build the complete argument list for the target.
pub fn build_argv(variant: &Variant, args: &[OsString]) -> Result<Bounded<OsString>, LaunchError> {
    let interval = validate(variant, args)?;
    const OP: &str = "create argument list";
    let mut argv = Bounded::with_limit(variant.max_args()).map_err(LaunchError::allocation(OP))?;
    argv.try_extend(variant.target.args.iter().map(OsString::from))
        .map_err(LaunchError::allocation(OP))?;
    if let Some(interval) = interval {
        argv.push(interval.to_arg()).map_err(LaunchError::allocation(OP))?;
    }
    tracing::debug!("{}: {} target arguments", variant.name, argv.as_slice().len());
    Ok(argv)
}
