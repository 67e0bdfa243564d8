use crate::catalog::ITEM_COUNT;
use crate::error::{Error, Result};
use crate::scoring::check_raw;
use tracing::debug;

const LAST_ITEM: u32 = ITEM_COUNT as u32;

/// Antworten je Item (Rohwerte 1-5), Index = Item-Nummer - 1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    values: [Option<u8>; ITEM_COUNT],
}

impl AnswerStore {
    /// Beantwortet das nächste offene Item in Katalogreihenfolge.
    /// Nur Antworten 1-5 sind zulässig.
    pub fn push(&mut self, raw: u8) -> Result<u32> {
        let raw = check_raw(raw)?;
        let offset = self
            .values
            .iter()
            .position(Option::is_none)
            .ok_or(Error::UnknownItem(LAST_ITEM + 1))?;
        self.values[offset] = Some(raw);
        let id = offset as u32 + 1;
        debug!(item = id, raw, "answer stored");
        Ok(id)
    }

    /// Antwort für eine Item-Nummer setzen, eine vorhandene Antwort wird überschrieben
    pub fn insert(&mut self, id: u32, raw: u8) -> Result<()> {
        let offset = Self::offset(id)?;
        let raw = check_raw(raw)?;
        if let Some(previous) = self.values[offset].replace(raw) {
            debug!(item = id, previous, raw, "answer overwritten");
        } else {
            debug!(item = id, raw, "answer stored");
        }
        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<u8> {
        Self::offset(id).ok().and_then(|offset| self.values[offset])
    }

    pub fn answered(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Offene Item-Nummern in Katalogreihenfolge
    pub fn missing(&self) -> Vec<u32> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_none())
            .map(|(index, _)| index as u32 + 1)
            .collect()
    }

    pub fn clear(&mut self) {
        self.values = [None; ITEM_COUNT];
    }

    fn offset(id: u32) -> Result<usize> {
        match id {
            1..=LAST_ITEM => Ok((id - 1) as usize),
            _ => Err(Error::UnknownItem(id)),
        }
    }
}

impl TryFrom<&[u8]> for AnswerStore {
    type Error = Error;

    /// Vollständiger oder teilweiser Antwortsatz in Katalogreihenfolge
    fn try_from(values: &[u8]) -> Result<Self> {
        let mut store = AnswerStore::default();
        for &raw in values {
            store.push(raw)?;
        }
        Ok(store)
    }
}
