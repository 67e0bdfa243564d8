use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::scoring::{categorize, score, AdjustedItem, Category, Scored, TOTAL_MAX, TOTAL_MIN};
use crate::store::AnswerStore;
use serde::Serialize;
use std::fmt;

pub const FOOTER: &str = "– Ambiguitätstoleranz-Selbsteinschätzung (Trainer:innen). \
Dieses Tool dient der Selbstreflexion und ersetzt keine Diagnostik.";

/// Ergebnis eines vollständig beantworteten Tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub items: Vec<AdjustedItem>,
    pub total: u32,
    pub category: Category,
}

impl Report {
    pub fn new(catalog: &Catalog, store: &AnswerStore) -> Result<Self> {
        if !store.is_complete() {
            return Err(Error::IncompleteResponseSet {
                missing: store.missing(),
            });
        }
        score(catalog, store)?.try_into()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TryFrom<Scored> for Report {
    type Error = Error;

    fn try_from(scored: Scored) -> Result<Self> {
        if !scored.is_complete() {
            let missing = scored
                .items
                .iter()
                .filter(|item| item.adjusted.is_none())
                .map(|item| item.id)
                .collect();
            return Err(Error::IncompleteResponseSet { missing });
        }
        Ok(Report {
            category: categorize(scored.total)?,
            items: scored.items,
            total: scored.total,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Gesamtwerte-Bereich: {} – {} Punkte (nach Umkodierung der negativ gepolten Items).",
            TOTAL_MIN, TOTAL_MAX
        )?;
        writeln!(f)?;
        writeln!(f, "Ihr Gesamtscore: {} Punkte", self.total)?;
        writeln!(
            f,
            "Einstufung: {} — {}",
            self.category,
            self.category.description()
        )?;
        writeln!(f)?;
        writeln!(f, "Details je Item (Rohwert → umkodiert)")?;
        for item in &self.items {
            let marker = if item.reverse { " (negativ)" } else { "" };
            writeln!(
                f,
                "  Item {:>2}{:<10} Antwort: {} → Umkodiert: {}",
                item.id,
                marker,
                item.raw.unwrap_or_default(),
                item.adjusted.unwrap_or_default()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Hinweis zur Interpretation")?;
        for category in Category::all() {
            writeln!(f, "  - {}", category.interpretation())?;
        }
        writeln!(f)?;
        write!(f, "{}", FOOTER)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::catalog::QUESTIONS;

    #[test]
    fn test_report() {
        let store = AnswerStore::try_from(&[5u8; 12][..]).unwrap();
        let report = Report::new(&QUESTIONS, &store).unwrap();
        assert_eq!(report.total, 44);
        assert_eq!(report.category, Category::High);
        assert_eq!(report.items.len(), 12);
    }

    #[test]
    fn test_report_not_fullfilled() {
        let store = AnswerStore::try_from(&[3u8; 11][..]).unwrap();
        match Report::new(&QUESTIONS, &store) {
            Err(Error::IncompleteResponseSet { missing }) => assert_eq!(missing, vec![12]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_report_from_partial_scored() {
        let mut store = AnswerStore::default();
        store.insert(2, 3).unwrap();
        let scored = score(&QUESTIONS, &store).unwrap();
        let missing = match Report::try_from(scored) {
            Err(Error::IncompleteResponseSet { missing }) => missing,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(missing.len(), 11);
        assert!(!missing.contains(&2));
    }

    #[test]
    fn test_display() {
        let store = AnswerStore::try_from(&[3u8; 12][..]).unwrap();
        let text = Report::new(&QUESTIONS, &store).unwrap().to_string();
        assert!(text.contains("Ihr Gesamtscore: 36 Punkte"));
        assert!(text.contains("Einstufung: Mittel — Umgang mit Ungewissheit ist kontextabhängig"));
        assert!(text.contains("Item  3 (negativ)"));
        assert_eq!(text.matches("Antwort: 3 → Umkodiert: 3").count(), 12);
        assert!(text.ends_with(
            "– Ambiguitätstoleranz-Selbsteinschätzung (Trainer:innen). \
             Dieses Tool dient der Selbstreflexion und ersetzt keine Diagnostik."
        ));
    }

    #[test]
    fn test_json() {
        let store = AnswerStore::try_from(&[1u8; 12][..]).unwrap();
        let json = Report::new(&QUESTIONS, &store).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 28);
        assert_eq!(value["category"], "medium");
        assert_eq!(value["items"][2]["adjusted"], 5);
        assert_eq!(value["items"][2]["reverse"], true);
    }
}
