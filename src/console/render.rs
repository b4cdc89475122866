use crate::events::{EventSink, TableEvent};
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Writes table events to a text stream, one line per event.
///
/// `EventSink::emit` cannot fail, so the first write error is parked and
/// handed back through `take_error`.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: false, error: None }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &TableEvent) -> io::Result<()> {
        let text = event.to_string();
        match event {
            TableEvent::TurnStarted { .. } => writeln!(self.out)?,
            TableEvent::HandShown { .. } => writeln!(self.out, "{text}")?,
            _ if !self.color => writeln!(self.out, "{text}")?,
            TableEvent::Win { .. } => writeln!(self.out, "{}", text.green())?,
            TableEvent::Lose { .. } => writeln!(self.out, "{}", text.red())?,
            TableEvent::Bust { .. } => writeln!(self.out, "{}", text.red().bold())?,
            TableEvent::Push { .. } => writeln!(self.out, "{}", text.yellow())?,
            TableEvent::Notice(_) => writeln!(self.out, "{}", text.dark_yellow())?,
        }
        self.out.flush()
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: TableEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_event(&event) {
            log::error!("failed to render table event: {err}");
            self.error = Some(err);
        }
    }
}
