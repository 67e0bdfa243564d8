use crate::catalog::{Catalog, ITEM_COUNT};
use crate::error::DomainError;
use crate::store::AnswerStore;
use serde::Serialize;
use std::fmt;
use tracing::debug;

pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 5;
pub const TOTAL_MIN: u32 = SCALE_MIN as u32 * ITEM_COUNT as u32;
pub const TOTAL_MAX: u32 = SCALE_MAX as u32 * ITEM_COUNT as u32;

pub(crate) fn check_raw(raw: u8) -> Result<u8, DomainError> {
    match raw {
        SCALE_MIN..=SCALE_MAX => Ok(raw),
        _ => Err(DomainError::Raw(raw)),
    }
}

/// Umkodierung negativ gepolter Items: 1⇒5, 2⇒4, 3⇒3, 4⇒2, 5⇒1
pub fn reverse_score(raw: u8) -> Result<u8, DomainError> {
    Ok(SCALE_MIN + SCALE_MAX - check_raw(raw)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdjustedItem {
    pub id: u32,
    pub raw: Option<u8>,
    pub adjusted: Option<u8>,
    pub reverse: bool,
}

/// Ergebnis der Auswertung, auch für unvollständige Antwortsätze
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scored {
    pub items: Vec<AdjustedItem>,
    /// Summe der umkodierten Werte aller beantworteten Items
    pub total: u32,
}

impl Scored {
    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|item| item.adjusted.is_some())
    }
}

/// Summenwert-Verfahren
///
/// Für jedes Item in Katalogreihenfolge wird der Rohwert nachgeschlagen und bei
/// negativ gepolten Items (3, 6, 8, 11) umkodiert. Offene Items bleiben leer und
/// zählen nicht zur Summe. Die Vollständigkeit prüft der Aufrufer.
pub fn score(catalog: &Catalog, store: &AnswerStore) -> Result<Scored, DomainError> {
    let items = catalog
        .items()
        .iter()
        .map(|item| {
            let raw = store.get(item.id);
            let adjusted = match raw {
                Some(raw) if item.reverse => Some(reverse_score(raw)?),
                Some(raw) => Some(check_raw(raw)?),
                None => None,
            };
            Ok::<_, DomainError>(AdjustedItem {
                id: item.id,
                raw,
                adjusted,
                reverse: item.reverse,
            })
        })
        .collect::<Result<Vec<AdjustedItem>, DomainError>>()?;
    let total = items
        .iter()
        .filter_map(|item| item.adjusted)
        .map(u32::from)
        .sum();
    debug!(total, answered = store.answered(), "scored answers");
    Ok(Scored { items, total })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 12-26
    Low,
    /// 27-41
    Medium,
    /// 42-60
    High,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Low => "Niedrig",
            Category::Medium => "Mittel",
            Category::High => "Hoch",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Low => "hoher Wunsch nach Klarheit/Planbarkeit in Kundenprojekten",
            Category::Medium => "Umgang mit Ungewissheit ist kontextabhängig",
            Category::High => "flexible, gelassene Haltung gegenüber wechselnden Anforderungen",
        }
    }

    /// Hinweis zur Interpretation
    pub fn interpretation(&self) -> &'static str {
        match self {
            Category::Low => "Niedrig (12–26): hoher Wunsch nach Eindeutigkeit und Planbarkeit; klare Strukturen unterstützen Entscheidungen.",
            Category::Medium => "Mittel (27–41): Umgang mit Unsicherheit ist situationsabhängig; Austausch mit Auftraggeber:innen kann Klarheit schaffen.",
            Category::High => "Hoch (42–60): hohe Flexibilität und Lernorientierung; nützlich in Akquise- und Projektsituationen mit wechselnden Anforderungen.",
        }
    }

    pub fn all() -> [Category; 3] {
        [Category::Low, Category::Medium, Category::High]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Einstufung mit inklusiven Obergrenzen. Summen außerhalb 12-60 sind kein
/// vollständig beantworteter Test.
pub fn categorize(total: u32) -> Result<Category, DomainError> {
    match total {
        TOTAL_MIN..=26 => Ok(Category::Low),
        27..=41 => Ok(Category::Medium),
        42..=TOTAL_MAX => Ok(Category::High),
        _ => Err(DomainError::Total(total)),
    }
}
