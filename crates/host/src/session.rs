use std::path::{Path, PathBuf};

use fileflow_settings::NavigationPreferences;

use crate::commands::OpenRequest;

/// A document the host currently knows about.
/// 宿主目前已知的文件。
///
/// Untitled buffers carry no path and are invisible to navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDocument {
    pub path: Option<PathBuf>,
}

impl HostDocument {
    /// Creates a document backed by a file on disk.
    /// 建立對應到磁碟檔案的文件。
    pub fn saved(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Creates an untitled buffer.
    /// 建立尚未命名的緩衝區。
    pub fn untitled() -> Self {
        Self { path: None }
    }
}

/// The editor-like host the navigation commands run against.
/// 導覽指令所依附的宿主編輯器介面。
///
/// Opens are fire-and-forget: the command layer hands over an
/// [`OpenRequest`] and does not wait for the open to complete.
pub trait DocumentHost {
    /// The currently focused document, if any.
    /// 目前取得焦點的文件。
    fn active_document(&self) -> Option<HostDocument>;

    /// Visible document tabs, ordered oldest to newest.
    /// 可見的文件分頁，由最舊排到最新。
    fn visible_documents(&self) -> Vec<HostDocument>;

    /// The host's current navigation preferences, read fresh per call.
    /// 宿主目前的導覽偏好設定；每次呼叫皆重新讀取。
    fn preferences(&self) -> NavigationPreferences;

    /// Performs the actual open/preview action.
    /// 執行實際的開啟或預覽動作。
    fn open(&mut self, request: &OpenRequest);
}

/// Determines the "current file" for commands without an explicit path.
/// 為未帶路徑參數的指令推斷「目前檔案」。
///
/// Previews are not active editors in some hosts, so the last opened file
/// is kept as a fallback. Resolution order: the active document (when it
/// has a path), then the last recorded open, then the newest visible tab.
#[derive(Debug, Default)]
pub struct CurrentPathTracker {
    last_opened: Option<PathBuf>,
}

impl CurrentPathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a document-opened event. Untitled documents are ignored.
    /// 記錄文件開啟事件；未命名文件會被忽略。
    pub fn record_opened(&mut self, document: &HostDocument) {
        if let Some(path) = &document.path {
            self.last_opened = Some(path.clone());
        }
    }

    /// The last path recorded as opened, if any.
    /// 最近一次記錄為已開啟的路徑。
    pub fn last_opened(&self) -> Option<&Path> {
        self.last_opened.as_deref()
    }

    /// Resolves the current file path against the host.
    /// 透過宿主狀態解析目前檔案路徑。
    pub fn current_path<H: DocumentHost>(&self, host: &H) -> Option<PathBuf> {
        if let Some(path) = host.active_document().and_then(|document| document.path) {
            return Some(path);
        }
        if let Some(path) = &self.last_opened {
            return Some(path.clone());
        }
        host.visible_documents()
            .pop()
            .and_then(|document| document.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct StubHost {
        active: Option<HostDocument>,
        visible: Vec<HostDocument>,
    }

    impl DocumentHost for StubHost {
        fn active_document(&self) -> Option<HostDocument> {
            self.active.clone()
        }

        fn visible_documents(&self) -> Vec<HostDocument> {
            self.visible.clone()
        }

        fn preferences(&self) -> NavigationPreferences {
            NavigationPreferences::default()
        }

        fn open(&mut self, _request: &OpenRequest) {}
    }

    #[test]
    fn active_document_wins() {
        let host = StubHost {
            active: Some(HostDocument::saved("/work/active.txt")),
            visible: vec![HostDocument::saved("/work/visible.txt")],
        };
        let mut tracker = CurrentPathTracker::new();
        tracker.record_opened(&HostDocument::saved("/work/opened.txt"));

        assert_eq!(
            tracker.current_path(&host),
            Some(PathBuf::from("/work/active.txt"))
        );
    }

    #[test]
    fn untitled_active_falls_back_to_last_opened() {
        let host = StubHost {
            active: Some(HostDocument::untitled()),
            visible: vec![HostDocument::saved("/work/visible.txt")],
        };
        let mut tracker = CurrentPathTracker::new();
        tracker.record_opened(&HostDocument::saved("/work/opened.txt"));

        assert_eq!(
            tracker.current_path(&host),
            Some(PathBuf::from("/work/opened.txt"))
        );
    }

    #[test]
    fn newest_visible_tab_is_the_final_fallback() {
        let host = StubHost {
            active: None,
            visible: vec![
                HostDocument::saved("/work/old.txt"),
                HostDocument::saved("/work/new.txt"),
            ],
        };
        let tracker = CurrentPathTracker::new();

        assert_eq!(
            tracker.current_path(&host),
            Some(PathBuf::from("/work/new.txt"))
        );
    }

    #[test]
    fn empty_host_resolves_nothing() {
        let host = StubHost {
            active: None,
            visible: Vec::new(),
        };
        let tracker = CurrentPathTracker::new();

        assert_eq!(tracker.current_path(&host), None);
    }

    #[test]
    fn untitled_open_events_are_ignored() {
        let mut tracker = CurrentPathTracker::new();
        tracker.record_opened(&HostDocument::saved("/work/a.txt"));
        tracker.record_opened(&HostDocument::untitled());

        assert_eq!(tracker.last_opened(), Some(Path::new("/work/a.txt")));
    }
}
