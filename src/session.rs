use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::report::Report;
use crate::scoring::{score, Scored};
use crate::store::AnswerStore;
use tracing::{debug, info, warn};

pub const INCOMPLETE_WARNING: &str =
    "Bitte beantworten Sie alle 12 Items, um das Ergebnis zu sehen.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Answering,
    AllAnswered,
    Displaying,
}

/// Ein Durchlauf des Fragebogens: Antworten plus die Anforderung "Ergebnis anzeigen".
///
/// Auswertung erfolgt bei jeder Abfrage neu. Wurde das Ergebnis einmal angefordert,
/// aktualisiert eine spätere Änderung das angezeigte Ergebnis ohne erneute Anforderung.
#[derive(Debug)]
pub struct Session<'a> {
    catalog: &'a Catalog,
    store: AnswerStore,
    requested: bool,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            store: AnswerStore::default(),
            requested: false,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.store
    }

    pub fn answer(&mut self, id: u32, raw: u8) -> Result<()> {
        self.store.insert(id, raw)
    }

    /// Beantwortet das nächste offene Item und liefert dessen Nummer
    pub fn answer_next(&mut self, raw: u8) -> Result<u32> {
        self.store.push(raw)
    }

    /// Zurücksetzen: alle Antworten löschen, Anforderung verwerfen
    pub fn reset(&mut self) {
        debug!(answered = self.store.answered(), "session reset");
        self.store.clear();
        self.requested = false;
    }

    /// Ergebnis anzeigen. Bei offenen Items bleibt die Anforderung bestehen,
    /// damit der Hinweis sichtbar bleibt, bis alle Items beantwortet sind.
    pub fn show_result(&mut self) -> Result<Report> {
        self.requested = true;
        match Report::new(self.catalog, &self.store) {
            Ok(report) => {
                info!(total = report.total, category = %report.category, "result shown");
                Ok(report)
            }
            Err(err @ Error::IncompleteResponseSet { .. }) => {
                warn!(missing = ?self.store.missing(), "result requested before all items were answered");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    pub fn state(&self) -> State {
        match (self.store.is_complete(), self.requested) {
            (false, _) => State::Answering,
            (true, false) => State::AllAnswered,
            (true, true) => State::Displaying,
        }
    }

    pub fn warning(&self) -> Option<&'static str> {
        match self.requested && !self.store.is_complete() {
            true => Some(INCOMPLETE_WARNING),
            false => None,
        }
    }

    /// Angezeigtes Ergebnis, nur im Zustand `Displaying`
    pub fn report(&self) -> Option<Report> {
        match self.state() {
            State::Displaying => Report::new(self.catalog, &self.store).ok(),
            _ => None,
        }
    }

    /// Laufende Auswertung, auch für unvollständige Antworten (z.B. für den Export)
    pub fn scored(&self) -> Result<Scored> {
        Ok(score(self.catalog, &self.store)?)
    }
}
