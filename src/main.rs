use std::io::{stdin, BufRead};

use ambiguity_check::config::{ExportConfig, OutputFormat, TelemetryConfig};
use ambiguity_check::export::write_csv;
use ambiguity_check::session::INCOMPLETE_WARNING;
use ambiguity_check::{telemetry, Error, Session, QUESTIONS};
use clap::Parser;
use tracing::warn;

/// Ambiguitätstoleranz-Selbsteinschätzung (12 Items)
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Alle Antworten in Itemreihenfolge, z.B. 4,3,2,5,...; ohne Angabe wird interaktiv gefragt
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=5))]
    answers: Option<Vec<u8>>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[command(flatten)]
    export: ExportConfig,
    #[command(flatten)]
    telemetry: TelemetryConfig,
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Answer(u8),
    /// `<item>=<antwort>`, ändert ein beliebiges Item
    Set(u32, u8),
    Reset,
    Show,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    telemetry::init(&args.telemetry)?;

    let mut session = Session::new(&QUESTIONS);
    match args.answers {
        Some(values) => {
            for raw in values {
                session.answer_next(raw)?;
            }
        }
        None => interview(&mut session, stdin().lock())?,
    }

    match session.show_result() {
        Ok(report) => match args.format {
            OutputFormat::Text => println!("{}", report),
            OutputFormat::Json => println!("{}", report.to_json()?),
        },
        Err(Error::IncompleteResponseSet { missing }) => {
            println!("{}", INCOMPLETE_WARNING);
            println!("Offene Items: {:?}", missing);
        }
        Err(err) => return Err(err),
    }

    if let Some(target) = args.export.target() {
        let path = write_csv(&session.scored()?, &target)?;
        println!("Ergebnisse gespeichert: {}", path.display());
    }
    Ok(())
}

/// Fragt die offenen Items der Reihe nach ab. Endet, wenn alle beantwortet sind
/// oder die Eingabe endet.
fn interview<R: BufRead>(session: &mut Session, mut input: R) -> Result<(), Error> {
    let catalog = session.catalog();
    println!("{}", catalog.title);
    println!("{}", catalog.instruction);
    for point in &catalog.scale {
        print!("  {} => {}", point.value, point.label);
    }
    println!();
    println!("  3=5 => Item 3 nachträglich ändern  z => Zurücksetzen  e => Ergebnis anzeigen");
    println!();

    let mut buffer = String::new();
    while let Some(id) = session.answers().missing().first().copied() {
        if let Some(item) = catalog.item(id) {
            match item.reverse {
                true => println!("{}. {} (negativ gepolt)", item.id, item.text),
                false => println!("{}. {}", item.id, item.text),
            }
        }
        loop {
            buffer.clear();
            if input.read_line(&mut buffer)? == 0 {
                return Ok(());
            }
            match parse_input(buffer.trim()).and_then(|input| apply(session, id, input)) {
                Ok(()) => break,
                Err(err) if err.is_recoverable() => {
                    warn!(item = id, error = %err, "input rejected");
                    match err {
                        Error::UnknownItem(_) => println!("Items sind von 1 bis 12 nummeriert."),
                        _ => println!("Antwort bitte als Zahl von 1 bis 5 eingeben."),
                    }
                }
                Err(err) => return Err(err),
            }
        }
        println!();
    }
    Ok(())
}

fn apply(session: &mut Session, id: u32, input: Input) -> Result<(), Error> {
    match input {
        Input::Answer(raw) => session.answer(id, raw),
        Input::Set(other, raw) => {
            session.answer(other, raw)?;
            if let Some(report) = session.report() {
                println!("{}", report);
            }
            Ok(())
        }
        Input::Reset => {
            session.reset();
            println!("Alle Antworten wurden zurückgesetzt.");
            Ok(())
        }
        Input::Show => {
            if let Err(Error::IncompleteResponseSet { .. }) = session.show_result() {
                println!("{}", INCOMPLETE_WARNING);
            }
            Ok(())
        }
    }
}

fn parse_input(value: &str) -> Result<Input, Error> {
    match value {
        "z" | "Z" => Ok(Input::Reset),
        "e" | "E" => Ok(Input::Show),
        _ if value.contains('=') => {
            let unparsable = || Error::Unparsable(value.to_string());
            let (id, raw) = value.split_once('=').ok_or_else(unparsable)?;
            let id = id.trim().parse::<u32>().map_err(|_| unparsable())?;
            let raw = raw.trim().parse::<u8>().map_err(|_| unparsable())?;
            Ok(Input::Set(id, raw))
        }
        _ => value
            .parse::<u8>()
            .map(Input::Answer)
            .map_err(|_| Error::Unparsable(value.to_string())),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ambiguity_check::State;
    use std::io::Cursor;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("3").unwrap(), Input::Answer(3));
        assert_eq!(parse_input("z").unwrap(), Input::Reset);
        assert_eq!(parse_input("E").unwrap(), Input::Show);
        assert_eq!(parse_input("3=5").unwrap(), Input::Set(3, 5));
        assert_eq!(parse_input("12 = 1").unwrap(), Input::Set(12, 1));
        assert!(matches!(parse_input("drei"), Err(Error::Unparsable(_))));
        assert!(matches!(parse_input("1="), Err(Error::Unparsable(_))));
        assert!(matches!(parse_input("=4"), Err(Error::Unparsable(_))));
    }

    #[test]
    fn test_interview() {
        let mut session = Session::new(&QUESTIONS);
        interview(&mut session, Cursor::new("3\n".repeat(12))).unwrap();
        assert_eq!(session.state(), State::AllAnswered);
        assert_eq!(session.show_result().unwrap().total, 36);
    }

    #[test]
    fn test_interview_rejects_invalid_input() {
        let mut session = Session::new(&QUESTIONS);
        let input = format!("x\n0\n6\n{}", "1\n".repeat(12));
        interview(&mut session, Cursor::new(input)).unwrap();
        assert!(session.answers().is_complete());
        assert_eq!(session.answers().get(1), Some(1));
    }

    #[test]
    fn test_interview_reset() {
        let mut session = Session::new(&QUESTIONS);
        let input = format!("2\n2\nz\n{}", "5\n".repeat(12));
        interview(&mut session, Cursor::new(input)).unwrap();
        assert_eq!(session.show_result().unwrap().total, 44);
    }

    #[test]
    fn test_interview_early_result() {
        let mut session = Session::new(&QUESTIONS);
        interview(&mut session, Cursor::new("4\ne\n")).unwrap();
        assert_eq!(session.answers().answered(), 1);
        assert_eq!(session.state(), State::Answering);
        assert_eq!(session.warning(), Some(INCOMPLETE_WARNING));
    }

    #[test]
    fn test_interview_changes_earlier_answer() {
        let mut session = Session::new(&QUESTIONS);
        let input = format!("2\n1=5\n{}", "3\n".repeat(11));
        interview(&mut session, Cursor::new(input)).unwrap();
        assert!(session.answers().is_complete());
        assert_eq!(session.answers().get(1), Some(5));
        assert_eq!(session.show_result().unwrap().total, 5 + 11 * 3);
    }

    #[test]
    fn test_change_after_result() {
        let mut session = Session::new(&QUESTIONS);
        interview(&mut session, Cursor::new("3\n".repeat(12))).unwrap();
        session.show_result().unwrap();
        apply(&mut session, 12, Input::Set(3, 1)).unwrap();
        assert_eq!(session.report().map(|report| report.total), Some(38));
    }

    #[test]
    fn test_interview_rejects_unknown_item() {
        let mut session = Session::new(&QUESTIONS);
        assert!(matches!(
            apply(&mut session, 1, Input::Set(13, 2)),
            Err(Error::UnknownItem(13))
        ));

        let input = format!("13=2\n1=9\n{}", "4\n".repeat(12));
        interview(&mut session, Cursor::new(input)).unwrap();
        assert!(session.answers().is_complete());
        assert_eq!(session.answers().get(1), Some(4));
    }
}
