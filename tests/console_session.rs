use blackjack_rs::config::DeckPolicy;
use blackjack_rs::console::{run_session, ConsoleError, ConsolePrompt, ConsoleSink, SessionSetup};
use std::io::Cursor;

type Prompt = ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>>;

fn session(input: &str, setup: SessionSetup) -> (Result<u64, ConsoleError>, String, String) {
    let mut prompt: Prompt = ConsolePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut sink = ConsoleSink::new(Vec::new());
    let result = run_session(&mut prompt, &mut sink, setup);
    let asked = String::from_utf8(prompt.into_parts().1).unwrap();
    let table = String::from_utf8(sink.into_inner()).unwrap();
    (result, asked, table)
}

fn seeded() -> SessionSetup {
    SessionSetup { seed: Some(11), ..SessionSetup::default() }
}

#[test]
fn interactive_setup_then_one_round() {
    // two players, names, both stand, then decline another round
    let (result, asked, table) = session("2\nAnn\nBo\nn\nn\nn\n", seeded());
    assert_eq!(result.unwrap(), 1);
    assert!(asked.starts_with("\t\tWelcome to Blackjack!\n\n"));
    assert!(asked.contains("How many players? (1 - 7): "));
    assert_eq!(asked.matches("Enter player name: ").count(), 2);
    assert!(asked.contains("Ann, do you want a hit? (Y/N): "));
    assert!(asked.contains("Bo, do you want a hit? (Y/N): "));
    assert!(asked.contains("Do you want to play again? (Y/N): "));
    assert!(table.contains("Ann:\t"));
    assert!(table.contains("House:\tXX\t"));
}

#[test]
fn named_players_skip_seating_prompts() {
    let setup = SessionSetup {
        names: Some(vec!["Cy".into()]),
        seed: Some(3),
        deck_policy: DeckPolicy::Fresh,
    };
    let (result, asked, _) = session("n\ny\nn\nN\n", setup);
    assert_eq!(result.unwrap(), 2);
    assert!(!asked.contains("How many players?"));
}

#[test]
fn end_of_input_ends_the_session() {
    let (result, _, table) = session("1\nAnn\n", seeded());
    assert_eq!(result.unwrap(), 1);
    assert!(table.contains("Ann:\t"));
}

#[test]
fn closed_input_during_setup_is_an_error() {
    let (result, _, _) = session("", seeded());
    assert!(matches!(result, Err(ConsoleError::InputClosed)));
}

#[test]
fn too_many_named_players_is_a_config_error() {
    let names = (0..8).map(|i| format!("P{i}")).collect();
    let setup = SessionSetup { names: Some(names), ..seeded() };
    let (result, _, _) = session("", setup);
    assert!(matches!(result, Err(ConsoleError::Config(_))));
}
