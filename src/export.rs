use crate::error::Result;
use crate::scoring::Scored;
use csv::{Terminator, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const FILE_NAME: &str = "Ambiguitaetstoleranz_Trainerinnen_Test.csv";
/// Damit Tabellenkalkulationen die Datei als UTF-8 erkennen (Umlaute)
pub const BOM: char = '\u{FEFF}';

const HEADER: [&str; 4] = ["Item", "Negativ gepolt", "Antwort (1-5)", "Umkodiert (1-5)"];

/// CSV-Tabelle: Kopfzeile, ein Datensatz je Item, Summenzeile. Trennzeichen `;`.
pub fn to_csv(scored: &Scored) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);
    writer.write_record(HEADER)?;
    for item in &scored.items {
        writer.write_record([
            item.id.to_string(),
            if item.reverse { "Ja" } else { "Nein" }.to_string(),
            item.raw.map(|raw| raw.to_string()).unwrap_or_default(),
            item.adjusted
                .map(|adjusted| adjusted.to_string())
                .unwrap_or_default(),
        ])?;
    }
    let total = scored.total.to_string();
    writer.write_record(["Gesamt", "", "", total.as_str()])?;
    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    let mut csv = String::with_capacity(bytes.len() + BOM.len_utf8());
    csv.push(BOM);
    csv.push_str(&String::from_utf8_lossy(&bytes));
    Ok(csv)
}

/// Schreibt die Tabelle nach `path`. Ist `path` ein Verzeichnis, wird der feste Dateiname verwendet.
pub fn write_csv(scored: &Scored, path: &Path) -> Result<PathBuf> {
    let target = match path.is_dir() {
        true => path.join(FILE_NAME),
        false => path.to_path_buf(),
    };
    fs::write(&target, to_csv(scored)?)?;
    info!(path = %target.display(), total = scored.total, "results exported");
    Ok(target)
}
