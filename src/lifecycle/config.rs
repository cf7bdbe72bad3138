use serde::Deserialize;

/// Channel capacities for the actors and the trigger.
///
/// When a channel is full, senders wait for space, so these bound how much
/// work can queue up in front of each component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Pending requests the account actor may queue.
    pub account_buffer: usize,
    /// Pending requests the store actor may queue.
    pub store_buffer: usize,
    /// Creation events waiting for the dispatcher.
    pub trigger_buffer: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            account_buffer: 32,
            store_buffer: 32,
            trigger_buffer: 64,
        }
    }
}
