//! The launchers we ship, and what each one hands off to.

/// The program a launcher replaces itself with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDescriptor {
    /// Absolute path; never searched for in `PATH`.
    pub path: &'static str,
    /// Arguments that always follow the program name.
    pub args: &'static [&'static str],
}

/// One launcher flavor. Everything here is fixed at compile time; nothing
/// the caller passes in can change which program runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    /// Name used in log output.
    pub name: &'static str,
    /// The program to run.
    pub target: TargetDescriptor,
    /// Whether `--after <N>` is accepted and forwarded as `--after=N`.
    pub accepts_after: bool,
    /// Caller environment variables copied through when set and non-empty.
    pub forwarded_env: &'static [&'static str],
}

/// Refreshes the apt package index.
pub const APT_UPDATE: Variant = Variant {
    name: "apt-update",
    target: TargetDescriptor {
        path: "/usr/bin/apt-get",
        args: &["-q", "update"],
    },
    accepts_after: false,
    forwarded_env: &["http_proxy", "https_proxy"],
};

/// Refreshes the Smart package manager channels.
pub const SMART_UPDATE: Variant = Variant {
    name: "smart-update",
    target: TargetDescriptor {
        path: "/usr/share/smart/smart",
        args: &["update"],
    },
    accepts_after: true,
    forwarded_env: &[],
};

impl Variant {
    /// The most arguments the target can be given, excluding the program name.
    pub const fn max_args(&self) -> usize {
        self.target.args.len() + self.accepts_after as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::const_assert_eq!(APT_UPDATE.max_args(), 2);
    static_assertions::const_assert_eq!(SMART_UPDATE.max_args(), 2);

    #[test]
    fn test_targets_are_absolute() {
        for v in [APT_UPDATE, SMART_UPDATE] {
            assert!(v.target.path.starts_with('/'), "{}", v.name);
        }
    }
}
