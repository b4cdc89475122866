//! Table events: everything the core wants shown to the players.
//!
//! The engine never writes to a terminal itself. It hands `TableEvent`s to an
//! `EventSink`, and frontends decide how to render them. `Vec<TableEvent>` is a
//! sink too, which is how tests observe a round.

use crate::hand::Hand;
use std::fmt;

/// Recoverable table conditions. Reported to the players, then play continues.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("No card to flip!")]
    NoCardToFlip,
    #[error("Out of cards. Unable to deal.")]
    OutOfCards,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableEvent {
    /// A participant's hand should be displayed as it stands now.
    HandShown { name: String, hand: Hand },
    /// A participant is about to take their additional-card turn.
    TurnStarted { name: String },
    Bust { name: String },
    Win { name: String },
    Lose { name: String },
    Push { name: String },
    Notice(TableError),
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableEvent::HandShown { name, hand } => write!(f, "{name}:\t{hand}"),
            TableEvent::TurnStarted { .. } => Ok(()),
            TableEvent::Bust { name } => write!(f, "{name} busts."),
            TableEvent::Win { name } => write!(f, "{name} wins."),
            TableEvent::Lose { name } => write!(f, "{name} loses."),
            TableEvent::Push { name } => write!(f, "{name} pushes."),
            TableEvent::Notice(err) => write!(f, "{err}"),
        }
    }
}

/// Receiver for table events.
pub trait EventSink {
    fn emit(&mut self, event: TableEvent);
}

impl EventSink for Vec<TableEvent> {
    fn emit(&mut self, event: TableEvent) {
        self.push(event);
    }
}

/// Discards everything; useful for simulations that only read the round report.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl EventSink for Silent {
    fn emit(&mut self, _event: TableEvent) {}
}
