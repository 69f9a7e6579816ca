//! Failures of the launch pipeline.
//!
//! Every variant is terminal: the entrypoint reports it on stderr and exits
//! with status 1. Syscall sites convert their errno with one of the
//! `map_err` adapters below so each check stays a single line.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use update_launcher_utils::BoundedError;

/// A failure at any stage of the launch.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The effective uid has no usable account database entry.
    #[error("Unable to find passwd entry for uid {uid} ({source})")]
    Identity {
        /// The effective uid that was looked up.
        uid: u32,
        /// Why the lookup failed.
        #[source]
        source: io::Error,
    },
    /// Arguments other than nothing or `--after <N>`.
    #[error("Unsupported command line option")]
    Usage,
    /// `--after` was given a value that is not a base-10 integer.
    #[error("Wrong interval value '{value}'")]
    Interval {
        /// The rejected value, lossily converted for display.
        value: String,
    },
    /// Querying a process resource failed.
    #[error("Unable to {op} ({source})")]
    Resource {
        /// What was being done.
        op: &'static str,
        /// The system error.
        #[source]
        source: io::Error,
    },
    /// Building the child argument list or environment failed.
    #[error("Unable to {op} ({source})")]
    Allocation {
        /// What was being built.
        op: &'static str,
        /// The builder error.
        #[source]
        source: BoundedError,
    },
    /// Changing groups or user ids failed, or the result did not stick.
    #[error("Unable to {op} ({source})")]
    Privilege {
        /// What was being done.
        op: &'static str,
        /// The system error.
        #[source]
        source: io::Error,
    },
    /// Changing process filesystem state failed.
    #[error("Unable to {op} ({source})")]
    Filesystem {
        /// What was being done.
        op: &'static str,
        /// The system error.
        #[source]
        source: io::Error,
    },
    /// Replacing the process image failed.
    #[error("Unable to execute {} ({source})", .path.display())]
    Exec {
        /// The target program.
        path: PathBuf,
        /// The system error.
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub(crate) fn resource<E: Into<io::Error>>(op: &'static str) -> impl FnOnce(E) -> Self {
        move |e| Self::Resource {
            op,
            source: e.into(),
        }
    }

    pub(crate) fn allocation(op: &'static str) -> impl FnOnce(BoundedError) -> Self {
        move |source| Self::Allocation { op, source }
    }

    pub(crate) fn privilege<E: Into<io::Error>>(op: &'static str) -> impl FnOnce(E) -> Self {
        move |e| Self::Privilege {
            op,
            source: e.into(),
        }
    }

    pub(crate) fn filesystem<E: Into<io::Error>>(op: &'static str) -> impl FnOnce(E) -> Self {
        move |e| Self::Filesystem {
            op,
            source: e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = LaunchError::privilege("set real and effective uid")(nix::errno::Errno::EPERM);
        assert_eq!(
            e.to_string(),
            format!(
                "Unable to set real and effective uid ({})",
                io::Error::from(nix::errno::Errno::EPERM)
            )
        );
        let e = LaunchError::Interval {
            value: "abc".into(),
        };
        assert_eq!(e.to_string(), "Wrong interval value 'abc'");
        let e = LaunchError::Exec {
            path: "/usr/bin/apt-get".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(e.to_string().starts_with("Unable to execute /usr/bin/apt-get ("));
    }

    #[test]
    fn test_identity_message_names_uid() {
        let e = LaunchError::Identity {
            uid: 4242,
            source: io::Error::new(io::ErrorKind::NotFound, "no such account"),
        };
        assert_eq!(
            e.to_string(),
            "Unable to find passwd entry for uid 4242 (no such account)"
        );
    }
}
