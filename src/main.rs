//! grepjump - open file-search matches in your preferred text editor
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use grepjump_app::{
    edit_file, BuiltinDefaults, ConsoleNotifier, EditorRegistry, LaunchOutcome, SystemLauncher,
    TomlConfigStore, KNOWN_EDITORS,
};
use grepjump_core::EditRequest;

/// grepjump - open file-search matches in your preferred text editor
#[derive(Parser, Debug)]
#[command(name = "grepjump")]
#[command(about = "Open file-search matches in your preferred text editor", long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "PATH", required_unless_present = "editors")]
    path: Option<PathBuf>,

    /// Line number of the match (1-based)
    #[arg(short, long, default_value_t = 1)]
    line: u32,

    /// Column number of the match (1-based)
    #[arg(short, long, default_value_t = 1)]
    column: u32,

    /// Text of the matched line, used for tab-width column correction
    #[arg(long, value_name = "TEXT")]
    line_text: Option<String>,

    /// Print configured editor profiles and known templates, then exit
    #[arg(long)]
    editors: bool,

    /// Use an alternate configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    grepjump_core::logging::init()?;

    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(TomlConfigStore::default_path);
    let mut registry = EditorRegistry::new(TomlConfigStore::open(config_path));
    registry.load(&BuiltinDefaults)?;

    if args.editors {
        print_editors(&registry);
        return Ok(());
    }

    let Some(path) = args.path else {
        // clap's required_unless_present guard keeps this unreachable
        return Ok(());
    };

    let mut request = EditRequest::at(path, args.line, args.column);
    if let Some(line_text) = args.line_text {
        request = request.with_line_text(line_text);
    }

    match edit_file(&request, registry.profiles(), &SystemLauncher, &ConsoleNotifier) {
        LaunchOutcome::Editor { .. } | LaunchOutcome::DefaultApp => Ok(()),
        LaunchOutcome::MissingPlaceholder | LaunchOutcome::Failed => {
            // The notifier already told the user what went wrong.
            std::process::exit(1);
        }
    }
}

fn print_editors(registry: &EditorRegistry<TomlConfigStore>) {
    match registry.profiles() {
        Some(profiles) if !profiles.is_empty() => {
            println!("Configured editors:");
            for profile in profiles {
                let editor = if profile.editor_path.is_empty() {
                    "(OS default)"
                } else {
                    profile.editor_path.as_str()
                };
                println!(
                    "  {:<14} {} {}",
                    profile.file_types, editor, profile.arguments
                );
            }
        }
        _ => println!("No editors configured."),
    }

    println!();
    println!("Known editor templates (add one to your configuration):");
    for editor in KNOWN_EDITORS {
        println!(
            "  {:<20} {} {}",
            editor.display_name, editor.command, editor.arguments
        );
    }
}
