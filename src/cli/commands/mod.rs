pub mod analysis;
pub mod config;
pub mod data;
pub mod entry;
pub mod history;
pub mod system;

use crate::cli::registry::CommandRegistry;

/// Registers every shell command, in the order `help` lists them.
pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let definitions = entry::definitions()
        .into_iter()
        .chain(history::definitions())
        .chain(analysis::definitions())
        .chain(data::definitions())
        .chain(config::definitions())
        .chain(system::definitions());
    for entry in definitions {
        registry.register(entry);
    }
}
