use blackjack_rs::config::DeckPolicy;
use blackjack_rs::console::{run_session, ConsolePrompt, ConsoleSink, SessionSetup};
use clap::Parser;
use std::io::{self, IsTerminal};

#[derive(Parser, Debug)]
#[command(author, version, about = "Blackjack for 1-7 players against the house", long_about = None)]
struct Cli {
    /// Player names; skips the interactive seating prompts when given.
    #[arg(num_args = 0..=7)]
    players: Vec<String>,

    /// Seed the shuffle for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// `fresh` reshuffles a full deck every round; `deplete` keeps dealing one deck.
    #[arg(long, default_value_t = DeckPolicy::Fresh)]
    deck_policy: DeckPolicy,

    /// Disable coloured announcements.
    #[arg(long)]
    no_color: bool,
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    log::info!("blackjack {} starting", blackjack_rs::VERSION);

    let color = !cli.no_color && io::stdout().is_terminal();
    let stdin = io::stdin();
    let mut prompt = ConsolePrompt::new(stdin.lock(), io::stdout());
    let mut sink = ConsoleSink::new(io::stdout()).with_color(color);
    let setup = SessionSetup {
        names: (!cli.players.is_empty()).then_some(cli.players),
        seed: cli.seed,
        deck_policy: cli.deck_policy,
    };

    let rounds = run_session(&mut prompt, &mut sink, setup)?;
    log::info!("session over after {rounds} round(s)");
    Ok(())
}
