use crate::cards::{parse_cards, Card, CardParseError, Rank};
use std::fmt;
use std::str::FromStr;

/// Totals above this bust.
pub const BLACKJACK: u32 = 21;

/// Cards held by a participant, in the order they were dealt.
///
/// ```
/// use blackjack_rs::cards::{Card, Rank, Suit};
/// use blackjack_rs::hand::Hand;
///
/// let mut hand = Hand::new();
/// hand.add(Card::new(Rank::Ace, Suit::Spades));
/// hand.add(Card::new(Rank::King, Suit::Hearts));
/// assert_eq!(hand.total(), 21);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(7) }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn first_mut(&mut self) -> Option<&mut Card> {
        self.cards.first_mut()
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Best blackjack total for the hand.
    ///
    /// Returns 0 for an empty hand and for a hand whose first card is face down,
    /// so a dealer's hidden total never leaks. A single Ace counts as 11 when
    /// that keeps the total at or under 21; any further Aces stay at 1.
    pub fn total(&self) -> u32 {
        match self.cards.first() {
            None => return 0,
            Some(first) if first.value() == 0 => return 0,
            Some(_) => {}
        }
        let sum: u32 = self.cards.iter().map(|c| u32::from(c.value())).sum();
        let has_ace = self.cards.iter().any(|c| c.is_face_up() && c.rank() == Rank::Ace);
        if has_ace && sum <= 11 {
            sum + 10
        } else {
            sum
        }
    }

    pub fn is_busted(&self) -> bool {
        self.total() > BLACKJACK
    }
}

impl fmt::Display for Hand {
    /// Cards separated by tabs, then `(total)` when the total is visible.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("<empty>");
        }
        for card in &self.cards {
            write!(f, "{card}\t")?;
        }
        let total = self.total();
        if total != 0 {
            write!(f, "({total})")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cards(s).map(Hand::from_cards)
    }
}
