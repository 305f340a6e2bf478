use clap::{Parser, Subcommand, ValueEnum};

use bell_cli::commands::type_ops::TypeOptions;
use bell_cli::commands::{config_ops, convert_ops, table_ops, type_ops};
use bell_session::SessionMode;

#[derive(Parser)]
#[command(name = "belltool", about = "Pager keyboard input diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Standalone,
    Extension,
}

impl From<Mode> for SessionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Standalone => SessionMode::Standalone,
            Mode::Extension => SessionMode::Extension,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the digit-pair table in keypad row order
    Table {
        /// Only this row (0-9)
        #[arg(long)]
        row: Option<u8>,
        /// Custom keymap TOML (optional)
        #[arg(long)]
        keymap: Option<String>,
    },
    /// Replay a key script: digits, '<' delete, '.' confirm, '#N' pick candidate N
    Type {
        /// Key script, e.g. "44 04 03 01 ."
        script: String,
        /// Dictionary TOML used for conversion (optional)
        #[arg(long)]
        dict: Option<String>,
        /// Custom keymap TOML (optional)
        #[arg(long)]
        keymap: Option<String>,
        /// Hosting mode
        #[arg(long, value_enum, default_value = "standalone")]
        mode: Mode,
        /// Insert characters directly instead of composing
        #[arg(long)]
        direct: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert a kana reading with a dictionary
    Convert {
        /// Dictionary TOML file
        dict_file: String,
        /// Kana reading
        reading: String,
        /// Maximum number of candidates
        #[arg(short, long, default_value = "20")]
        n: usize,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default keymap TOML
    KeymapExport,
    /// Validate a keymap TOML file
    KeymapValidate { file: String },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Table { row, keymap } => table_ops::table(row, keymap.as_deref()),
        Command::Type {
            script,
            dict,
            keymap,
            mode,
            direct,
            json,
        } => {
            let opts = TypeOptions {
                keymap_file: keymap.as_deref(),
                dict_file: dict.as_deref(),
                mode: mode.into(),
                direct,
                json,
            };
            type_ops::type_cmd(&script, &opts);
        }
        Command::Convert {
            dict_file,
            reading,
            n,
            json,
        } => convert_ops::convert_cmd(&dict_file, &reading, n, json),
        Command::KeymapExport => config_ops::keymap_export(),
        Command::KeymapValidate { file } => config_ops::keymap_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
