use crate::libs::messages::Message;

/// Prints the command summary.
pub fn cmd() -> Vec<Message> {
    vec![Message::Help]
}
