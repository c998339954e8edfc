use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fileflow_host::{
    CommandOutcome, DocumentHost, HostDocument, NavigationCommand, NavigationSession, OpenRequest,
};
use fileflow_navigation::OutOfBoundsPolicy;
use fileflow_settings::{NavigationPreferences, PreferencesStore};

#[derive(Parser)]
#[command(
    name = "fileflow-cli",
    about = "Step through sibling files and folders from the command line",
    author,
    version
)]
struct Cli {
    /// 作為導覽起點的目前檔案。 / Current file the navigation starts from.
    #[arg(long, global = true, value_name = "FILE")]
    path: Option<PathBuf>,

    /// 偏好設定檔（JSON）；省略時採用預設值。 / Preferences file (JSON); defaults apply when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    prefs: Option<PathBuf>,

    /// 單次覆寫越界策略。 / One-shot override of the out-of-bounds policy.
    #[arg(long, global = true, value_name = "POLICY")]
    policy: Option<PolicyChoice>,

    /// 列印完整開啟請求（含預覽旗標）。 / Print the full open request including the preview flag.
    #[arg(long, global = true)]
    print_open: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 前往下一個檔案。 / Go to the next file.
    Next,
    /// 前往上一個檔案。 / Go to the previous file.
    Previous,
    /// 前往目前資料夾的第一個檔案。 / Go to the first file of the current folder.
    First,
    /// 前往目前資料夾的最後一個檔案。 / Go to the last file of the current folder.
    Last,
    /// 前往下一個資料夾的第一個檔案。 / Go to the first file of the next folder.
    NextFolder,
    /// 前往上一個資料夾的最後一個檔案。 / Go to the last file of the previous folder.
    PreviousFolder,
}

impl From<Commands> for NavigationCommand {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Next => NavigationCommand::NextFile,
            Commands::Previous => NavigationCommand::PreviousFile,
            Commands::First => NavigationCommand::FirstFile,
            Commands::Last => NavigationCommand::LastFile,
            Commands::NextFolder => NavigationCommand::NextFolder,
            Commands::PreviousFolder => NavigationCommand::PreviousFolder,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyChoice {
    None,
    #[value(name = "loop-within-folder", alias = "loop")]
    LoopWithinFolder,
    #[value(name = "advance-to-adjacent-folder", alias = "advance")]
    AdvanceToAdjacentFolder,
}

impl From<PolicyChoice> for OutOfBoundsPolicy {
    fn from(choice: PolicyChoice) -> Self {
        match choice {
            PolicyChoice::None => OutOfBoundsPolicy::None,
            PolicyChoice::LoopWithinFolder => OutOfBoundsPolicy::LoopWithinFolder,
            PolicyChoice::AdvanceToAdjacentFolder => OutOfBoundsPolicy::AdvanceToAdjacentFolder,
        }
    }
}

/// One-shot host: the `--path` argument is the active document and opens
/// are captured rather than handed to an editor.
struct CliHost {
    current: Option<PathBuf>,
    preferences: NavigationPreferences,
}

impl DocumentHost for CliHost {
    fn active_document(&self) -> Option<HostDocument> {
        self.current.clone().map(HostDocument::saved)
    }

    fn visible_documents(&self) -> Vec<HostDocument> {
        Vec::new()
    }

    fn preferences(&self) -> NavigationPreferences {
        self.preferences.clone()
    }

    fn open(&mut self, _request: &OpenRequest) {}
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut preferences = load_preferences(cli.prefs.as_deref())?;
    if let Some(choice) = cli.policy {
        preferences.out_of_bounds_behavior = choice.into();
    }

    let current = cli.path.as_deref().map(absolute_path).transpose()?;
    let host = CliHost {
        current,
        preferences,
    };
    let mut session = NavigationSession::new(host);

    match session.execute(cli.command.into()) {
        CommandOutcome::Opened { request, prompt } => {
            println!("{}", request.path.display());
            if cli.print_open {
                println!("preview: {}", request.preview);
                if let Some(prompt) = prompt {
                    println!("previous available: {}", prompt.has_previous);
                    println!("next available: {}", prompt.has_next);
                }
            }
        }
        CommandOutcome::Notice(notice) => {
            eprintln!("{notice}");
        }
        CommandOutcome::NoCurrentPath => {
            log::debug!("no current file; nothing to do");
        }
    }
    Ok(())
}

fn load_preferences(path: Option<&Path>) -> Result<NavigationPreferences> {
    match path {
        Some(path) => {
            let store = PreferencesStore::load(path)
                .with_context(|| format!("cannot load preferences from {}", path.display()))?;
            Ok(store.preferences().clone())
        }
        None => Ok(NavigationPreferences::default()),
    }
}

// The current file is not required to exist (it may have been deleted
// between listing and invocation), so the path is made absolute without
// touching the filesystem.
fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().context("cannot determine working directory")?;
    Ok(cwd.join(path))
}
