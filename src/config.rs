use crate::export::FILE_NAME;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Gemeinsame Optionen beider Programme
#[derive(Args, Debug, Clone)]
pub struct TelemetryConfig {
    /// Log-Level bzw. Filter, wenn RUST_LOG nicht gesetzt ist
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExportConfig {
    /// Ergebnisse als CSV in diese Datei schreiben
    #[arg(long, conflicts_with = "export_dir")]
    pub export: Option<PathBuf>,
    /// Ergebnisse als CSV mit festem Dateinamen in dieses Verzeichnis schreiben
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

impl ExportConfig {
    pub fn target(&self) -> Option<PathBuf> {
        match (&self.export, &self.export_dir) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(dir)) => Some(dir.join(FILE_NAME)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_export_target() {
        assert_eq!(ExportConfig::default().target(), None);
        let config = ExportConfig {
            export: None,
            export_dir: Some(PathBuf::from("out")),
        };
        assert_eq!(config.target(), Some(Path::new("out").join(FILE_NAME)));

        let config = ExportConfig {
            export: Some(PathBuf::from("result.csv")),
            export_dir: None,
        };
        assert_eq!(config.target(), Some(PathBuf::from("result.csv")));
    }
}
