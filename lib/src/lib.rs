//! # Privilege-dropping update launcher
//!
//! Installed setuid (or started by a privileged scheduler), a launcher
//! resolves the account it should run as, drops to it for good, scrubs
//! the environment and inherited descriptors, and execs a fixed package
//! index refresh command.
//!
//! The stages run strictly in order. [`PrivilegesDropped`] and
//! [`Hardened`] can only be produced by their stage, so exec is
//! unreachable until everything before it has succeeded.

// See https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![forbid(unused_must_use)]
#![deny(unsafe_code)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::todo)]

mod args;
mod environ;
mod error;
mod exec;
mod harden;
mod identity;
mod launch;
mod privdrop;
mod variant;

pub use args::{build_argv, validate, Interval};
pub use environ::{EnvironmentSet, SAFE_PATH};
pub use error::LaunchError;
pub use exec::exec;
pub use harden::{harden, inherited_descriptors, Hardened, FD_CEILING};
pub use identity::Identity;
pub use launch::{launch, run};
pub use privdrop::{drop_privileges, PrivilegesDropped};
pub use variant::{TargetDescriptor, Variant, APT_UPDATE, SMART_UPDATE};
