//! Console frontend: prompts, rendering, and the replay loop.
//!
//! Everything here is generic over `BufRead`/`Write`, so the binary wires it to
//! stdin/stdout and tests wire it to in-memory buffers.

mod prompt;
mod render;

pub use prompt::ConsolePrompt;
pub use render::ConsoleSink;

use crate::config::{ConfigError, DeckPolicy, TableConfig};
use crate::game::Game;
use std::io::{self, BufRead, Write};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConsoleError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before setup finished")]
    InputClosed,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// What the session knows before anyone is prompted.
#[derive(Debug, Clone, Default)]
pub struct SessionSetup {
    /// Skip the count and name prompts when set.
    pub names: Option<Vec<String>>,
    pub seed: Option<u64>,
    pub deck_policy: DeckPolicy,
}

/// Run a whole session: welcome, seat players, play rounds until declined.
/// Returns the number of rounds played.
pub fn run_session<R, W, S>(
    prompt: &mut ConsolePrompt<R, W>,
    sink: &mut ConsoleSink<S>,
    setup: SessionSetup,
) -> Result<u64, ConsoleError>
where
    R: BufRead,
    W: Write,
    S: Write,
{
    prompt.welcome()?;
    let names = match setup.names {
        Some(names) => names,
        None => {
            let count = prompt.player_count()?;
            prompt.player_names(count)?
        }
    };
    let mut config = TableConfig::new(names)?.with_deck_policy(setup.deck_policy);
    if let Some(seed) = setup.seed {
        config = config.with_seed(seed);
    }

    let mut game = Game::new(&config);
    loop {
        game.play_round(prompt, sink);
        if let Some(err) = sink.take_error() {
            return Err(err.into());
        }
        if !prompt.play_again()? {
            break;
        }
    }
    Ok(game.rounds_played())
}
