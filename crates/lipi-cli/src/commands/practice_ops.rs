use lipi_core::{ConfigurationError, TransliterationMode};
use lipi_session::{
    Classification, KeyEvent, RecordError, SessionConfig, SessionSummary, TypingSession,
};
use serde::Serialize;

use crate::grid::render_layout;
use crate::recorder::JsonlRecorder;
use crate::script::{parse_script, ScriptError};

#[derive(Debug, thiserror::Error)]
pub enum PracticeError {
    #[error(transparent)]
    Config(#[from] ConfigurationError),
    #[error("script: {0}")]
    Script(#[from] ScriptError),
    #[error("record: {0}")]
    Record(#[from] RecordError),
}

/// Outcome of replaying a typing script against a prompt.
#[derive(Debug, Serialize)]
pub struct PracticeReport {
    pub prompt: String,
    pub typed: String,
    /// One mark per prompt character: `+` correct, `x` incorrect, `.` pending.
    pub marks: String,
    pub complete: bool,
    pub keystrokes: u32,
    pub errors: u32,
    pub summary: SessionSummary,
}

/// Replay `events` in a new session. Returns the session for further
/// inspection together with its report at `elapsed_seconds`.
pub fn run_practice(
    config: &SessionConfig,
    events: Vec<KeyEvent>,
    elapsed_seconds: f64,
) -> Result<(TypingSession, PracticeReport), PracticeError> {
    let mut session = TypingSession::start(config)?;
    for event in events {
        session.handle_key(event);
    }

    let scorer = session.scorer();
    let marks = scorer
        .classifications()
        .iter()
        .map(|c| match c {
            Classification::Correct => '+',
            Classification::Incorrect => 'x',
            Classification::Pending => '.',
        })
        .collect();
    let report = PracticeReport {
        prompt: config.prompt.clone(),
        typed: session.engine().committed_text(),
        marks,
        complete: session.is_complete(),
        keystrokes: scorer.keystrokes(),
        errors: scorer.errors(),
        summary: session.summary(elapsed_seconds),
    };
    Ok((session, report))
}

pub struct PracticeArgs<'a> {
    pub mode: &'a str,
    pub prompt: &'a str,
    pub script: &'a str,
    pub elapsed: f64,
    pub record: Option<&'a str>,
    pub keyboard: bool,
    pub json: bool,
}

pub fn practice_cmd(args: PracticeArgs<'_>) {
    let mode: TransliterationMode = die!(args.mode.parse(), "Error: {}");
    let events = die!(parse_script(args.script, mode), "Error parsing script: {}");
    let config = SessionConfig {
        mode: args.mode.to_string(),
        prompt: args.prompt.to_string(),
    };
    let (session, report) = die!(run_practice(&config, events, args.elapsed), "Error: {}");

    if args.json {
        let json = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{json}");
    } else {
        println!("prompt:   {}", report.prompt);
        println!("typed:    {}", report.typed);
        if !session.pending().is_empty() {
            println!("pending:  {}", session.pending());
        }
        println!("marks:    {}", report.marks);
        println!(
            "status:   {} ({} keystrokes, {} errors)",
            if report.complete { "complete" } else { "in progress" },
            report.keystrokes,
            report.errors
        );
        println!(
            "wpm:      {:.1}\naccuracy: {:.1}%",
            report.summary.wpm, report.summary.accuracy
        );
    }

    if args.keyboard {
        if let Some(layout) = session.engine().layout() {
            print!("{}", render_layout(layout, session.engine().last_key()));
        }
    }

    if let Some(path) = args.record {
        let recorder = JsonlRecorder::new(path);
        match session.finish(args.elapsed, &recorder) {
            Ok(_) => eprintln!("Recorded to {}", recorder.path().display()),
            Err(RecordError::Incomplete) => {
                eprintln!("Session incomplete; not recorded");
            }
            Err(e) => {
                eprintln!("Error recording session: {e}");
                std::process::exit(1);
            }
        }
    }
}
