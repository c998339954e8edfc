use std::fmt;
use std::path::PathBuf;

use fileflow_navigation::{folders, resolver, Direction};
use fileflow_settings::NavigationPreferences;

use crate::session::{CurrentPathTracker, DocumentHost, HostDocument};

/// The navigation commands a host can trigger.
/// 宿主可觸發的導覽指令。
///
/// None of them take an explicit path; the current file is resolved from
/// host state on every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    NextFile,
    PreviousFile,
    NextFolder,
    PreviousFolder,
    FirstFile,
    LastFile,
}

impl NavigationCommand {
    fn missing_target_notice(self) -> Notice {
        match self {
            NavigationCommand::NextFile => Notice::NoNextFile,
            NavigationCommand::PreviousFile => Notice::NoPreviousFile,
            NavigationCommand::NextFolder => Notice::NoNextFolder,
            NavigationCommand::PreviousFolder => Notice::NoPreviousFolder,
            NavigationCommand::FirstFile => Notice::NoFirstFile,
            NavigationCommand::LastFile => Notice::NoLastFile,
        }
    }
}

/// Neutral user-visible notice when a command has no target.
/// 指令沒有可前往目標時顯示的中性提示。
///
/// Absence of a target is expected behavior, not an error; whether the
/// notice is actually shown is the host's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoNextFile,
    NoPreviousFile,
    NoNextFolder,
    NoPreviousFolder,
    NoFirstFile,
    NoLastFile,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::NoNextFile => "There is no next file to go to.",
            Notice::NoPreviousFile => "There is no previous file to go to.",
            Notice::NoNextFolder => "There is no next folder to go to.",
            Notice::NoPreviousFolder => "There is no previous folder to go to.",
            Notice::NoFirstFile => "There is no first file to go to.",
            Notice::NoLastFile => "There is no last file to go to.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Request handed to the host to open (or preview) a resolved file.
/// 交由宿主開啟（或預覽）目標檔案的請求。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub path: PathBuf,
    pub preview: bool,
}

/// Which navigation steps are available from a freshly opened file.
/// 從剛開啟的檔案出發，還能往哪些方向移動。
///
/// Computed at open time with two extra resolver calls; hosts render it
/// as a prompt with previous/next actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationPrompt {
    pub has_previous: bool,
    pub has_next: bool,
}

/// Result of executing one navigation command.
/// 單一導覽指令執行後的結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A file was resolved and the open request handed to the host.
    Opened {
        request: OpenRequest,
        prompt: Option<NavigationPrompt>,
    },
    /// Nothing to navigate to; carries the notice for the host to show.
    Notice(Notice),
    /// No current file could be resolved; the command is a no-op.
    NoCurrentPath,
}

/// Executes navigation commands against a host.
/// 對宿主執行導覽指令。
///
/// Preferences are re-read from the host on every command, so policy
/// changes take effect between calls without a restart. The tracker is
/// the single writer of the last-known-file fallback.
#[derive(Debug)]
pub struct NavigationSession<H: DocumentHost> {
    host: H,
    tracker: CurrentPathTracker,
}

impl<H: DocumentHost> NavigationSession<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            tracker: CurrentPathTracker::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn tracker(&self) -> &CurrentPathTracker {
        &self.tracker
    }

    /// Feeds a host "document opened" event into the tracker.
    /// 將宿主的「文件已開啟」事件餵入追蹤器。
    pub fn document_opened(&mut self, document: &HostDocument) {
        self.tracker.record_opened(document);
    }

    /// Runs one command to completion: resolve, open, report.
    /// 執行單一指令：解析、開啟、回報。
    pub fn execute(&mut self, command: NavigationCommand) -> CommandOutcome {
        let preferences = self.host.preferences();
        let Some(current) = self.tracker.current_path(&self.host) else {
            log::debug!("navigation command {command:?} ignored: no current file");
            return CommandOutcome::NoCurrentPath;
        };

        let policy = preferences.out_of_bounds_behavior;
        let target = match command {
            NavigationCommand::NextFile => {
                resolver::adjacent_file(&current, Direction::Next, policy)
            }
            NavigationCommand::PreviousFile => {
                resolver::adjacent_file(&current, Direction::Previous, policy)
            }
            NavigationCommand::NextFolder => folders::first_file_of_next_folder(&current),
            NavigationCommand::PreviousFolder => folders::last_file_of_previous_folder(&current),
            NavigationCommand::FirstFile => {
                current.parent().and_then(resolver::first_file)
            }
            NavigationCommand::LastFile => current.parent().and_then(resolver::last_file),
        };

        match target {
            Some(path) => self.open_resolved(path, &preferences),
            None => CommandOutcome::Notice(command.missing_target_notice()),
        }
    }

    fn open_resolved(
        &mut self,
        path: PathBuf,
        preferences: &NavigationPreferences,
    ) -> CommandOutcome {
        let request = OpenRequest {
            preview: preferences.should_preview(&path),
            path,
        };
        self.host.open(&request);
        self.tracker
            .record_opened(&HostDocument::saved(request.path.clone()));

        let prompt = preferences.show_navigation_popups.then(|| {
            let policy = preferences.out_of_bounds_behavior;
            NavigationPrompt {
                has_previous: resolver::adjacent_file(&request.path, Direction::Previous, policy)
                    .is_some(),
                has_next: resolver::adjacent_file(&request.path, Direction::Next, policy).is_some(),
            }
        });

        CommandOutcome::Opened { request, prompt }
    }
}
