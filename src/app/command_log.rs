//! Verlauf der ausgeführten Commands für Status-Anzeige und Tests.

use super::AppCommand;

/// Hält die zuletzt ausgeführten Commands (begrenzt) und zählt alle Commands
/// seit Programmstart.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    total: usize,
}

impl CommandLog {
    const CAPACITY: usize = 1000;

    /// Leerer Verlauf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt einen ausgeführten Command auf.
    ///
    /// Ist die Kapazität erreicht, fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::CAPACITY {
            self.entries.drain(..Self::CAPACITY / 2);
        }
        self.entries.push(command.clone());
        self.total += 1;
    }

    /// Anzahl der gehaltenen Einträge
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller jemals aufgenommenen Commands, auch verworfener.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Zuletzt ausgeführter Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Gehaltene Einträge in Ausführungsreihenfolge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
