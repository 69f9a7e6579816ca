//! Refresh the Smart channels as the unprivileged account owning this
//! binary's effective uid.
//!
//! Usage: `smart-update [--after <N>]`

fn main() {
    update_launcher_lib::launch(&update_launcher_lib::SMART_UPDATE)
}
