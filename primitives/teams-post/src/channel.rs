//! Channel alias table.

use crate::config::ChannelIds;
use crate::error::ConfigError;

/// Aliases accepted by `--channel`, in the order they are listed to users.
pub const ALIASES: [&str; 6] = [
    "amplifier-general",
    "amplifier-alerts",
    "amplifier-handoffs",
    "general",
    "alerts",
    "handoffs",
];

/// Immutable mapping from alias to provider channel identifier.
///
/// Built once at startup and handed to the poster.
#[derive(Debug, Clone)]
pub struct ChannelDirectory {
    entries: Vec<(&'static str, String)>,
}

impl ChannelDirectory {
    pub fn new(ids: &ChannelIds) -> Self {
        let entries = vec![
            ("amplifier-general", ids.general.clone()),
            ("amplifier-alerts", ids.alerts.clone()),
            ("amplifier-handoffs", ids.handoffs.clone()),
            ("general", ids.general.clone()),
            ("alerts", ids.alerts.clone()),
            ("handoffs", ids.handoffs.clone()),
        ];
        Self { entries }
    }

    /// Case-sensitive lookup of a channel alias.
    pub fn resolve(&self, name: &str) -> Result<&str, ConfigError> {
        self.entries
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, id)| id.as_str())
            .ok_or_else(|| ConfigError::UnknownChannel {
                name: name.to_string(),
                available: self.aliases().collect(),
            })
    }

    pub fn aliases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(alias, _)| *alias)
    }
}
