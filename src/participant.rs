//! Participants: the people (and the house) holding hands at the table.
//!
//! `Participant` carries what every seat shares: a name, a hand, and the
//! decision whether to take another card. Humans answer through a
//! `DecisionPort`, which keeps blocking console input (or any other
//! request/response frontend) outside the core. The dealer plays by rule.

use crate::events::{EventSink, TableError, TableEvent};
use crate::hand::Hand;
use std::fmt;
use std::collections::VecDeque;

/// The dealer draws while the total is at or below this.
pub const DEALER_HITS_THROUGH: u32 = 16;

/// Synchronous question/answer channel to the humans at the table.
pub trait DecisionPort {
    /// Ask `name` whether they want another card. `None` means no answer is
    /// coming (input closed), which is treated as standing.
    fn ask_hit(&mut self, name: &str, hand: &Hand) -> Option<String>;
}

/// True when the reply's first non-blank character is `y` or `Y`.
pub fn affirms(reply: &str) -> bool {
    matches!(reply.trim_start().chars().next(), Some('y' | 'Y'))
}

/// A seat at the table.
pub trait Participant {
    fn name(&self) -> &str;
    fn hand(&self) -> &Hand;
    fn hand_mut(&mut self) -> &mut Hand;
    /// Whether this participant takes another card right now.
    fn is_hitting(&self, port: &mut dyn DecisionPort) -> bool;

    fn total(&self) -> u32 {
        self.hand().total()
    }

    fn is_busted(&self) -> bool {
        self.hand().is_busted()
    }

    fn announce_bust(&self, sink: &mut dyn EventSink) {
        sink.emit(TableEvent::Bust { name: self.name().to_string() });
    }

    fn show_hand(&self, sink: &mut dyn EventSink) {
        sink.emit(TableEvent::HandShown {
            name: self.name().to_string(),
            hand: self.hand().clone(),
        });
    }
}

fn fmt_seat(name: &str, hand: &Hand, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{name}:\t{hand}")
}

/// A human player. Decisions come from the `DecisionPort`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Human {
    name: String,
    hand: Hand,
}

impl Human {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), hand: Hand::new() }
    }

    pub fn announce_win(&self, sink: &mut dyn EventSink) {
        sink.emit(TableEvent::Win { name: self.name.clone() });
    }

    pub fn announce_lose(&self, sink: &mut dyn EventSink) {
        sink.emit(TableEvent::Lose { name: self.name.clone() });
    }

    pub fn announce_push(&self, sink: &mut dyn EventSink) {
        sink.emit(TableEvent::Push { name: self.name.clone() });
    }
}

impl Participant for Human {
    fn name(&self) -> &str {
        &self.name
    }
    fn hand(&self) -> &Hand {
        &self.hand
    }
    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
    fn is_hitting(&self, port: &mut dyn DecisionPort) -> bool {
        port.ask_hit(&self.name, &self.hand).is_some_and(|reply| affirms(&reply))
    }
}

impl fmt::Display for Human {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_seat(&self.name, &self.hand, f)
    }
}

/// The house. Hits through 16, stands on 17 and above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    name: String,
    hand: Hand,
}

impl Dealer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), hand: Hand::new() }
    }

    /// Turn the hole card over (either way).
    pub fn flip_first_card(&mut self) -> Result<(), TableError> {
        let card = self.hand.first_mut().ok_or(TableError::NoCardToFlip)?;
        card.flip();
        Ok(())
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new("House")
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        &self.name
    }
    fn hand(&self) -> &Hand {
        &self.hand
    }
    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
    fn is_hitting(&self, _port: &mut dyn DecisionPort) -> bool {
        self.hand.total() <= DEALER_HITS_THROUGH
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_seat(&self.name, &self.hand, f)
    }
}

/// Replays a fixed list of answers, then stands. Handy for simulations and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPort {
    replies: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPort {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { replies: replies.into_iter().map(Into::into).collect(), asked: Vec::new() }
    }

    /// Names asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl DecisionPort for ScriptedPort {
    fn ask_hit(&mut self, name: &str, _hand: &Hand) -> Option<String> {
        self.asked.push(name.to_string());
        self.replies.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealt(hand: &str) -> Hand {
        hand.parse().unwrap()
    }

    #[test]
    fn affirmative_replies() {
        assert!(affirms("y"));
        assert!(affirms("Y"));
        assert!(affirms("  yes"));
        assert!(!affirms("n"));
        assert!(!affirms(""));
        assert!(!affirms("maybe"));
    }

    #[test]
    fn human_asks_the_port() {
        let mut ann = Human::new("Ann");
        *ann.hand_mut() = dealt("5c 6d");
        let mut port = ScriptedPort::new(["Y", "x"]);
        assert!(ann.is_hitting(&mut port));
        assert!(!ann.is_hitting(&mut port));
        assert!(!ann.is_hitting(&mut port), "closed port stands");
        assert_eq!(port.asked(), ["Ann", "Ann", "Ann"]);
    }

    #[test]
    fn dealer_hits_sixteen_stands_seventeen() {
        let mut house = Dealer::default();
        let mut port = ScriptedPort::default();
        *house.hand_mut() = dealt("10c 6d");
        assert!(house.is_hitting(&mut port));
        *house.hand_mut() = dealt("10c 7d");
        assert!(!house.is_hitting(&mut port));
        *house.hand_mut() = dealt("Ac 6d");
        assert!(!house.is_hitting(&mut port), "soft 17 stands");
        assert!(port.asked().is_empty(), "dealer never consults the port");
    }

    #[test]
    fn flip_first_card_on_empty_hand_is_reported() {
        let mut house = Dealer::default();
        assert_eq!(house.flip_first_card(), Err(TableError::NoCardToFlip));

        *house.hand_mut() = dealt("Kd 9s");
        house.flip_first_card().unwrap();
        assert_eq!(house.total(), 0);
        assert_eq!(house.to_string(), "House:\tXX\t9s\t");
        house.flip_first_card().unwrap();
        assert_eq!(house.total(), 19);
    }

    #[test]
    fn bust_needs_visible_total_over_21() {
        let mut bo = Human::new("Bo");
        *bo.hand_mut() = dealt("Kd Qh 5c");
        assert!(bo.is_busted());
        let mut sink: Vec<TableEvent> = Vec::new();
        bo.announce_bust(&mut sink);
        bo.announce_win(&mut sink);
        assert_eq!(
            sink,
            vec![TableEvent::Bust { name: "Bo".into() }, TableEvent::Win { name: "Bo".into() }]
        );
    }
}
