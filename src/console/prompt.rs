use super::ConsoleError;
use crate::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::hand::Hand;
use crate::participant::DecisionPort;
use std::io::{BufRead, Write};

/// Line-oriented questions to the people at the keyboard.
#[derive(Debug)]
pub struct ConsolePrompt<R: BufRead, W: Write> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.out)
    }

    /// Print `question` and read one line. `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.out, "{question}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn welcome(&mut self) -> Result<(), ConsoleError> {
        write!(self.out, "\t\tWelcome to Blackjack!\n\n")?;
        Ok(())
    }

    /// Ask until a count in 1..=7 is given.
    pub fn player_count(&mut self) -> Result<usize, ConsoleError> {
        loop {
            let reply = self
                .ask("How many players? (1 - 7): ")?
                .ok_or(ConsoleError::InputClosed)?;
            match reply.parse::<usize>() {
                Ok(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => return Ok(n),
                _ => log::debug!("rejected player count '{reply}'"),
            }
        }
    }

    /// Collect `count` names; each is the first word of a non-blank line.
    pub fn player_names(&mut self, count: usize) -> Result<Vec<String>, ConsoleError> {
        let mut names = Vec::with_capacity(count);
        while names.len() < count {
            let reply = self.ask("Enter player name: ")?.ok_or(ConsoleError::InputClosed)?;
            if let Some(word) = reply.split_whitespace().next() {
                names.push(word.to_string());
            }
        }
        writeln!(self.out)?;
        Ok(names)
    }

    /// Anything but `n`/`N` means another round. End of input stops.
    pub fn play_again(&mut self) -> Result<bool, ConsoleError> {
        let Some(reply) = self.ask("\nDo you want to play again? (Y/N): ")? else {
            return Ok(false);
        };
        Ok(!matches!(reply.chars().next(), Some('n' | 'N')))
    }
}

impl<R: BufRead, W: Write> DecisionPort for ConsolePrompt<R, W> {
    fn ask_hit(&mut self, name: &str, _hand: &Hand) -> Option<String> {
        match self.ask(&format!("{name}, do you want a hit? (Y/N): ")) {
            Ok(reply) => reply,
            Err(err) => {
                log::error!("could not read hit decision for {name}: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_parts().1).unwrap()
    }

    #[test]
    fn player_count_reprompts_until_in_range() {
        let mut p = prompt("0\nabc\n8\n3\n");
        assert_eq!(p.player_count().unwrap(), 3);
        assert_eq!(output(p).matches("How many players? (1 - 7): ").count(), 4);
    }

    #[test]
    fn player_count_fails_when_input_closes() {
        let mut p = prompt("9\n");
        assert!(matches!(p.player_count(), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn names_take_first_word_and_skip_blanks() {
        let mut p = prompt("Ann Lee\n\n  Bo\n");
        assert_eq!(p.player_names(2).unwrap(), vec!["Ann".to_string(), "Bo".to_string()]);
    }

    #[test]
    fn play_again_stops_on_n_or_eof() {
        assert!(prompt("y\n").play_again().unwrap());
        assert!(prompt("whatever\n").play_again().unwrap());
        assert!(!prompt("N\n").play_again().unwrap());
        assert!(!prompt("no\n").play_again().unwrap());
        assert!(!prompt("").play_again().unwrap());
    }

    #[test]
    fn hit_question_names_the_player() {
        let mut p = prompt("y\n");
        assert_eq!(p.ask_hit("Ann", &Hand::new()).as_deref(), Some("y"));
        assert_eq!(p.ask_hit("Ann", &Hand::new()), None);
        assert!(output(p).starts_with("Ann, do you want a hit? (Y/N): "));
    }
}
