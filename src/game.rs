use crate::config::{DeckPolicy, TableConfig};
use crate::deck::Deck;
use crate::events::{EventSink, TableEvent};
use crate::hand::Hand;
use crate::participant::{Dealer, DecisionPort, Human, Participant};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

/// Where a round currently is. A round walks these in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Idle,
    DealingInitial,
    RevealingInitial,
    PlayerTurns,
    DealerReveal,
    DealerTurn,
    Resolution,
    Cleanup,
}

/// How a player's round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    Win,
    Lose,
    Push,
    Bust,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Push => "Push",
            Outcome::Bust => "Bust",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SeatResult {
    pub name: String,
    pub hand: Hand,
    pub total: u32,
    pub outcome: Outcome,
}

/// Final state of a round, captured before the hands are cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundReport {
    pub dealer_hand: Hand,
    pub dealer_total: u32,
    pub dealer_busted: bool,
    pub seats: Vec<SeatResult>,
}

impl RoundReport {
    pub fn outcome_of(&self, name: &str) -> Option<Outcome> {
        self.seats.iter().find(|s| s.name == name).map(|s| s.outcome)
    }
}

/// One dealer, one deck, and up to seven players.
#[derive(Debug)]
pub struct Game {
    pub(crate) deck: Deck,
    pub(crate) dealer: Dealer,
    pub(crate) players: Vec<Human>,
    pub(crate) phase: Phase,
    deck_policy: DeckPolicy,
    rng: ChaCha8Rng,
    rounds_played: u64,
}

impl Game {
    /// Seat the players and shuffle a fresh deck.
    ///
    /// The RNG is seeded once here, from the configured seed or the clock.
    pub fn new(config: &TableConfig) -> Self {
        let mut game = Self::with_deck(config, Deck::new());
        game.deck.shuffle(&mut game.rng);
        game
    }

    /// Seat the players around an already prepared deck, used as-is for the
    /// first round.
    pub fn with_deck(config: &TableConfig, deck: Deck) -> Self {
        let seed = config.seed().unwrap_or_else(clock_seed);
        log::info!(
            "opening table: {} player(s), deck policy {}, seed {seed}",
            config.player_names().len(),
            config.deck_policy()
        );
        Self {
            deck,
            dealer: Dealer::default(),
            players: config.player_names().iter().map(Human::new).collect(),
            phase: Phase::Idle,
            deck_policy: config.deck_policy(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            rounds_played: 0,
        }
    }

    /// Returns a reference to the players
    pub fn players(&self) -> &[Human] {
        &self.players
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn deck_policy(&self) -> DeckPolicy {
        self.deck_policy
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Play one complete round.
    ///
    /// Human decisions go through `port`; everything the table announces
    /// goes to `sink`. Hands are empty again when this returns.
    pub fn play_round(
        &mut self,
        port: &mut dyn DecisionPort,
        sink: &mut dyn EventSink,
    ) -> RoundReport {
        self.refresh_deck();
        self.deal_initial(sink);
        self.reveal_initial(sink);
        self.player_turns(port, sink);
        self.dealer_reveal(sink);
        self.dealer_turn(port, sink);
        let report = self.resolve(sink);
        self.cleanup();
        self.rounds_played += 1;
        log::info!(
            "round {} done: dealer {}{}, {} card(s) left",
            self.rounds_played,
            report.dealer_total,
            if report.dealer_busted { " (bust)" } else { "" },
            self.deck.len()
        );
        report
    }

    fn enter(&mut self, phase: Phase) {
        log::debug!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn refresh_deck(&mut self) {
        match self.deck_policy {
            // The constructor already shuffled (or was handed) the first deck.
            DeckPolicy::Fresh if self.rounds_played > 0 => {
                self.deck.populate();
                self.deck.shuffle(&mut self.rng);
            }
            _ => {}
        }
    }

    fn deal_initial(&mut self, sink: &mut dyn EventSink) {
        self.enter(Phase::DealingInitial);
        for _ in 0..2 {
            for p in &mut self.players {
                if let Err(err) = self.deck.deal(p.hand_mut()) {
                    log::warn!("{}: {err}", p.name());
                    sink.emit(TableEvent::Notice(err));
                }
            }
            if let Err(err) = self.deck.deal(self.dealer.hand_mut()) {
                log::warn!("{}: {err}", self.dealer.name());
                sink.emit(TableEvent::Notice(err));
            }
        }
    }

    fn reveal_initial(&mut self, sink: &mut dyn EventSink) {
        self.enter(Phase::RevealingInitial);
        self.flip_hole_card(sink);
        for p in &self.players {
            p.show_hand(sink);
        }
        self.dealer.show_hand(sink);
    }

    fn player_turns(&mut self, port: &mut dyn DecisionPort, sink: &mut dyn EventSink) {
        self.enter(Phase::PlayerTurns);
        for p in &mut self.players {
            self.deck.deal_additional(p, port, sink);
        }
    }

    fn dealer_reveal(&mut self, sink: &mut dyn EventSink) {
        self.enter(Phase::DealerReveal);
        self.flip_hole_card(sink);
        self.dealer.show_hand(sink);
    }

    fn dealer_turn(&mut self, port: &mut dyn DecisionPort, sink: &mut dyn EventSink) {
        self.enter(Phase::DealerTurn);
        self.deck.deal_additional(&mut self.dealer, port, sink);
    }

    fn flip_hole_card(&mut self, sink: &mut dyn EventSink) {
        if let Err(err) = self.dealer.flip_first_card() {
            log::warn!("{err}");
            sink.emit(TableEvent::Notice(err));
        }
    }

    fn resolve(&mut self, sink: &mut dyn EventSink) -> RoundReport {
        self.enter(Phase::Resolution);
        let dealer_total = self.dealer.total();
        let dealer_busted = self.dealer.is_busted();
        let mut seats = Vec::with_capacity(self.players.len());
        for p in &self.players {
            let total = p.total();
            let outcome = if p.is_busted() {
                Outcome::Bust
            } else if dealer_busted {
                Outcome::Win
            } else {
                match total.cmp(&dealer_total) {
                    Ordering::Greater => Outcome::Win,
                    Ordering::Less => Outcome::Lose,
                    Ordering::Equal => Outcome::Push,
                }
            };
            match outcome {
                Outcome::Win => p.announce_win(sink),
                Outcome::Lose => p.announce_lose(sink),
                Outcome::Push => p.announce_push(sink),
                // already announced during the player's turn
                Outcome::Bust => {}
            }
            log::debug!("{}: {} vs {} -> {}", p.name(), total, dealer_total, outcome.label());
            seats.push(SeatResult {
                name: p.name().to_string(),
                hand: p.hand().clone(),
                total,
                outcome,
            });
        }
        RoundReport { dealer_hand: self.dealer.hand().clone(), dealer_total, dealer_busted, seats }
    }

    fn cleanup(&mut self) {
        self.enter(Phase::Cleanup);
        for p in &mut self.players {
            p.hand_mut().clear();
        }
        self.dealer.hand_mut().clear();
        self.enter(Phase::Idle);
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_else(|_| rand::rng().random())
}
