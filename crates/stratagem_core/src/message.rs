//! Message types for provider requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message sent to the provider.
///
/// # Examples
///
/// ```
/// use stratagem_core::{Message, Role};
///
/// let message = Message::new(Role::System, "Return three insights.");
/// assert_eq!(message.role, Role::System);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// Message text
    pub content: String,
}

impl Message {
    /// Creates a message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
