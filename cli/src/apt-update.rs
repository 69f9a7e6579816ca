//! Refresh the apt package index as the unprivileged account owning this
//! binary's effective uid. Takes no arguments.

fn main() {
    update_launcher_lib::launch(&update_launcher_lib::APT_UPDATE)
}
