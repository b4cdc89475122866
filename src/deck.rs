use crate::cards::{Card, Rank, Suit};
use crate::events::{EventSink, TableError, TableEvent};
use crate::hand::Hand;
use crate::participant::{DecisionPort, Participant};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

/// A single 52-card deck. Cards are dealt from the back.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Hand,
}

impl Deck {
    /// A freshly populated, unshuffled deck.
    ///
    /// ```
    /// use blackjack_rs::deck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn new() -> Self {
        let mut deck = Self::empty();
        deck.populate();
        deck
    }

    pub fn empty() -> Self {
        Self { cards: Hand::from_cards(Vec::with_capacity(DECK_SIZE)) }
    }

    /// A deck holding exactly `cards`; the last card is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards: Hand::from_cards(cards) }
    }

    /// Rebuild all 52 cards face up, suit by suit, Ace through King.
    pub fn populate(&mut self) {
        self.cards.clear();
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                self.cards.add(Card::new(r, s));
            }
        }
        log::debug!("deck populated with {} cards", self.cards.len());
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.as_mut_slice().shuffle(rng);
        log::debug!("deck shuffled ({} cards)", self.cards.len());
    }

    /// Move the top card into `hand`.
    pub fn deal(&mut self, hand: &mut Hand) -> Result<(), TableError> {
        let card = self.cards.pop().ok_or(TableError::OutOfCards)?;
        hand.add(card);
        Ok(())
    }

    /// Run one participant's turn: keep dealing while they are not busted
    /// and still want cards. The hand is shown after every card.
    ///
    /// An empty deck ends the turn after reporting it.
    pub fn deal_additional<P>(
        &mut self,
        participant: &mut P,
        port: &mut dyn DecisionPort,
        sink: &mut dyn EventSink,
    ) where
        P: Participant + ?Sized,
    {
        sink.emit(TableEvent::TurnStarted { name: participant.name().to_string() });
        while !participant.is_busted() && participant.is_hitting(port) {
            if let Err(err) = self.deal(participant.hand_mut()) {
                log::warn!("{}: {err}", participant.name());
                sink.emit(TableEvent::Notice(err));
                return;
            }
            participant.show_hand(sink);
            if participant.is_busted() {
                log::debug!("{} busts with {}", participant.name(), participant.total());
                participant.announce_bust(sink);
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::{Dealer, Human, ScriptedPort};
    use std::collections::HashSet;

    #[test]
    fn populate_builds_52_unique_face_up_cards() {
        let d = Deck::new();
        assert_eq!(d.len(), DECK_SIZE);
        let set: HashSet<_> = d.cards().iter().map(|c| c.to_tuple()).collect();
        assert_eq!(set.len(), DECK_SIZE);
        assert!(d.cards().iter().all(|c| c.is_face_up()));
        assert_eq!(d.cards()[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(d.cards()[13], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(d.cards()[51], Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn populate_replaces_leftovers() {
        let mut d = Deck::new();
        let mut hand = Hand::new();
        for _ in 0..10 {
            d.deal(&mut hand).unwrap();
        }
        d.populate();
        assert_eq!(d.len(), DECK_SIZE);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::new();
        let mut d2 = Deck::new();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards(), d2.cards());
        assert_ne!(d1.cards(), Deck::new().cards());
    }

    #[test]
    fn deal_moves_the_last_card() {
        let mut d = Deck::new();
        let mut hand = Hand::new();
        d.deal(&mut hand).unwrap();
        assert_eq!(hand.cards(), &[Card::new(Rank::King, Suit::Spades)]);
        assert_eq!(d.len(), 51);
    }

    #[test]
    fn empty_deck_reports_out_of_cards() {
        let mut d = Deck::empty();
        let mut hand = Hand::new();
        assert_eq!(d.deal(&mut hand), Err(TableError::OutOfCards));
        assert!(hand.is_empty());
    }

    #[test]
    fn dealer_turn_draws_to_seventeen() {
        let mut house = Dealer::default();
        *house.hand_mut() = "10c 2d".parse().unwrap();
        // top of deck is the last element: 3h then 5s
        let mut d = Deck::from_cards(vec![
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Three, Suit::Hearts),
        ]);
        let mut sink: Vec<TableEvent> = Vec::new();
        d.deal_additional(&mut house, &mut ScriptedPort::default(), &mut sink);
        assert_eq!(house.total(), 20);
        assert_eq!(d.len(), 1);
        let shown = sink.iter().filter(|e| matches!(e, TableEvent::HandShown { .. })).count();
        assert_eq!(shown, 2);
    }

    #[test]
    fn human_bust_ends_turn_with_announcement() {
        let mut bo = Human::new("Bo");
        *bo.hand_mut() = "Kd Qh".parse().unwrap();
        let mut d = Deck::from_cards(vec![Card::new(Rank::Five, Suit::Clubs)]);
        let mut port = ScriptedPort::new(["y", "y"]);
        let mut sink: Vec<TableEvent> = Vec::new();
        d.deal_additional(&mut bo, &mut port, &mut sink);
        assert_eq!(bo.total(), 25);
        assert_eq!(port.remaining(), 1, "no question after busting");
        assert_eq!(sink.last(), Some(&TableEvent::Bust { name: "Bo".into() }));
    }

    #[test]
    fn running_dry_mid_turn_stops_the_turn() {
        let mut house = Dealer::default();
        *house.hand_mut() = "2c 3d".parse().unwrap();
        let mut d = Deck::empty();
        let mut sink: Vec<TableEvent> = Vec::new();
        d.deal_additional(&mut house, &mut ScriptedPort::default(), &mut sink);
        assert_eq!(sink.last(), Some(&TableEvent::Notice(TableError::OutOfCards)));
        assert_eq!(house.hand().len(), 2);
    }
}
