use std::fs;
use std::process;

use clap::{Parser, Subcommand};

use lipi_cli::commands::practice_ops::PracticeArgs;
use lipi_cli::commands::{config_ops, layout_ops, practice_ops, translit_ops};

#[derive(Parser)]
#[command(name = "lipitool", about = "Lipi transliteration and practice diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate a typing script
    Translit {
        /// Mode: remington, inscript, phonetic or english
        #[arg(short, long, default_value = "phonetic")]
        mode: String,
        /// Typing script (see --file to read it from a file)
        script: Option<String>,
        /// Read the script from a file
        #[arg(long)]
        file: Option<String>,
        /// Print each committed unit with its input count
        #[arg(long)]
        units: bool,
    },
    /// List loaded layouts
    Layouts,
    /// Render a layout as a key grid
    Layout {
        /// Layout name
        name: String,
        /// Key identifier or DOM code to highlight
        #[arg(long)]
        highlight: Option<String>,
    },
    /// Replay a typing script against a prompt and report the score
    Practice {
        /// Mode: remington, inscript, phonetic or english
        #[arg(short, long)]
        mode: String,
        /// Reference text to type
        #[arg(short, long)]
        prompt: String,
        /// Typing script (see --file to read it from a file)
        script: Option<String>,
        /// Read the script from a file
        #[arg(long)]
        file: Option<String>,
        /// Elapsed time in seconds used for WPM
        #[arg(long, default_value = "60")]
        elapsed: f64,
        /// Append the summary to this JSONL file once complete
        #[arg(long)]
        record: Option<String>,
        /// Show the keyboard with the last key highlighted
        #[arg(long)]
        keyboard: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default phonetic rules as TOML
    PhoneticExport,
    /// Validate a custom phonetic rules TOML file
    PhoneticValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export a built-in layout as TOML
    LayoutExport {
        /// Layout name
        name: String,
    },
    /// Validate a custom layout TOML file
    LayoutValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn read_script(inline: Option<String>, file: Option<String>) -> String {
    match (inline, file) {
        (Some(s), None) => s,
        (None, Some(path)) => fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Error reading {path}: {e}");
            process::exit(1);
        }),
        _ => {
            eprintln!("Error: give either a script or --file");
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Translit {
            mode,
            script,
            file,
            units,
        } => {
            let script = read_script(script, file);
            translit_ops::translit_cmd(&mode, &script, units);
        }
        Command::Layouts => layout_ops::layout_list(),
        Command::Layout { name, highlight } => layout_ops::layout_show(&name, highlight.as_deref()),
        Command::Practice {
            mode,
            prompt,
            script,
            file,
            elapsed,
            record,
            keyboard,
            json,
        } => {
            let script = read_script(script, file);
            practice_ops::practice_cmd(PracticeArgs {
                mode: &mode,
                prompt: &prompt,
                script: &script,
                elapsed,
                record: record.as_deref(),
                keyboard,
                json,
            });
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::PhoneticExport => config_ops::phonetic_export(),
        Command::PhoneticValidate { file } => config_ops::phonetic_validate(&file),
        Command::LayoutExport { name } => config_ops::layout_export(&name),
        Command::LayoutValidate { file } => config_ops::layout_validate(&file),
    }
}
