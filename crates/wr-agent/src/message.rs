//! Inter-zone messages.

use wr_core::{Color, Pos};

/// The semantic type of a message.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Performative {
    /// "I dropped waste for you at `payload`."
    InformHandoff,
}

/// A colour-addressed message.  Delivered to every robot whose colour equals
/// `recipient`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Message {
    pub sender:       Color,
    pub recipient:    Color,
    pub performative: Performative,
    pub payload:      Pos,
}

impl Message {
    /// A hand-off notice from `sender` to the next zone to the right.
    ///
    /// # Panics
    ///
    /// Panics for a red sender: the terminal zone has no downstream.
    pub fn inform_handoff(sender: Color, at: Pos) -> Self {
        let recipient = sender
            .next()
            .unwrap_or_else(|| panic!("{sender} robots have no downstream zone to notify"));
        Self {
            sender,
            recipient,
            performative: Performative::InformHandoff,
            payload: at,
        }
    }
}
