use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Wertebereich verletzt. Tritt bei korrekt eingeschränkter Eingabe nie auf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("answer {0} is outside the scale 1-5")]
    Raw(u8),
    #[error("total {0} is outside the range 12-60")]
    Total(u32),
}

#[derive(Debug, Error)]
pub enum Error {
    /// Kein Item des Fragebogens
    #[error("item {0} is not part of the questionnaire")]
    UnknownItem(u32),
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Antworten fehlen
    #[error("{} of 12 items are unanswered", missing.len())]
    IncompleteResponseSet { missing: Vec<u32> },
    #[error("cannot read answer '{0}', expected a number between 1 and 5")]
    Unparsable(String),
    #[error("row {row}: expected {expected} fields, found {found}")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("telemetry error: {0}")]
    Telemetry(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Fehler, die dem Nutzer als Hinweis angezeigt werden und den Ablauf nicht beenden.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::IncompleteResponseSet { .. }
                | Error::UnknownItem(_)
                | Error::Unparsable(_)
                | Error::Domain(DomainError::Raw(_))
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_incomplete_message() {
        let err = Error::IncompleteResponseSet {
            missing: vec![4, 12],
        };
        assert_eq!(err.to_string(), "2 of 12 items are unanswered");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_domain_is_transparent() {
        let err: Error = DomainError::Total(61).into();
        assert_eq!(err.to_string(), "total 61 is outside the range 12-60");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_unknown_item_is_recoverable() {
        assert!(Error::UnknownItem(13).is_recoverable());
    }
}
