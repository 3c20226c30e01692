use lipi_cli::commands::practice_ops::run_practice;
use lipi_cli::commands::translit_ops::transliterate;
use lipi_cli::{parse_script, JsonlRecorder};
use lipi_core::{Language, TransliterationMode};
use lipi_session::{RecordError, SessionConfig, SessionRecorder};

fn config(mode: &str, prompt: &str) -> SessionConfig {
    SessionConfig {
        mode: mode.to_string(),
        prompt: prompt.to_string(),
    }
}

#[test]
fn test_transliterate_inscript_script() {
    let events = parse_script("kflve", TransliterationMode::Inscript).unwrap();
    let engine = transliterate(TransliterationMode::Inscript, events).unwrap();
    assert_eq!(engine.committed_text(), "कितना");
    assert_eq!(engine.committed().len(), 3);
}

#[test]
fn test_transliterate_phonetic_with_backspace() {
    let events = parse_script("namaste<bs>i", TransliterationMode::Phonetic).unwrap();
    let engine = transliterate(TransliterationMode::Phonetic, events).unwrap();
    assert_eq!(engine.committed_text(), "नमस्ति");
}

#[test]
fn test_practice_report() {
    let events = parse_script("kf", TransliterationMode::Inscript).unwrap();
    let (session, report) = run_practice(&config("inscript", "कम"), events, 12.0).unwrap();
    assert_eq!(report.typed, "कि");
    assert_eq!(report.marks, "+x");
    assert!(report.complete);
    assert_eq!(report.keystrokes, 2);
    assert_eq!(report.errors, 1);
    assert!((report.summary.accuracy - 50.0).abs() < 1e-9);
    assert!((report.summary.wpm - 1.0).abs() < 1e-9);
    assert_eq!(report.summary.language, Language::Hindi);
    assert!(session.is_complete());
}

#[test]
fn test_practice_unknown_mode() {
    let Err(err) = run_practice(&config("qwerty", "कम"), vec![], 1.0) else {
        panic!("unknown mode accepted");
    };
    assert_eq!(err.to_string(), "unsupported transliteration mode: qwerty");
}

#[test]
fn test_jsonl_recorder_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("sessions.jsonl");
    let recorder = JsonlRecorder::new(&path);
    assert!(recorder.load().unwrap().is_empty());

    for prompt in ["hi", "ok"] {
        let events = parse_script(prompt, TransliterationMode::English).unwrap();
        let (session, _) = run_practice(&config("english", prompt), events, 6.0).unwrap();
        session.finish(6.0, &recorder).unwrap();
    }

    let records = recorder.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].mode, TransliterationMode::English);
    assert!((records[1].wpm - 4.0).abs() < 1e-9);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.lines().all(|l| l.contains("\"language\":\"english\"")));
}

#[test]
fn test_incomplete_session_not_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let recorder = JsonlRecorder::new(dir.path().join("sessions.jsonl"));
    let events = parse_script("h", TransliterationMode::English).unwrap();
    let (session, report) = run_practice(&config("english", "hi"), events, 6.0).unwrap();
    assert!(!report.complete);
    assert!(matches!(
        session.finish(6.0, &recorder),
        Err(RecordError::Incomplete)
    ));
    assert!(!recorder.path().exists());
}

#[test]
fn test_recorder_rejects_corrupt_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.jsonl");
    std::fs::write(&path, "not json\n").unwrap();
    let recorder = JsonlRecorder::new(&path);
    assert!(matches!(recorder.load(), Err(RecordError::Serialize(_))));
    // Recording still appends.
    let events = parse_script("a", TransliterationMode::English).unwrap();
    let (session, _) = run_practice(&config("english", "a"), events, 1.0).unwrap();
    recorder.record(&session.summary(1.0)).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 2);
}
