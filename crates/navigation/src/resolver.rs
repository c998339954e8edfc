use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::folders;
use crate::listing;

/// Direction of a sibling-file step.
/// 相鄰檔案移動的方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Behavior when a step runs past either end of the folder.
/// 移動超出資料夾邊界時採用的策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum OutOfBoundsPolicy {
    /// Stop at the edges of the folder.
    #[default]
    None,
    /// Wrap around to the other end of the same folder.
    LoopWithinFolder,
    /// Spill into the adjacent sibling folder.
    AdvanceToAdjacentFolder,
}

/// Resolves the sibling file one step from `current` in `direction`.
/// 依方向尋找 `current` 的相鄰檔案。
///
/// The parent directory is re-listed on every call and sorted
/// case-insensitively; nothing is cached between calls. A current file
/// that is missing from its own listing indexes at -1, so stepping
/// previous lands out of range while stepping next lands on the first
/// entry. Returns `None` when no adjacent file exists under `policy`.
pub fn adjacent_file(
    current: &Path,
    direction: Direction,
    policy: OutOfBoundsPolicy,
) -> Option<PathBuf> {
    let directory = current.parent()?;
    let mut files = listing::files_in(directory);
    listing::sort_names(&mut files);

    let current_name = identity_name(current);
    let current_index = current_name
        .as_deref()
        .and_then(|name| files.iter().position(|file| file == name))
        .map(|index| index as isize)
        .unwrap_or(-1);
    let len = files.len() as isize;

    let mut candidate = match direction {
        Direction::Next => {
            let mut index = current_index + 1;
            if policy == OutOfBoundsPolicy::LoopWithinFolder && index >= len {
                index = 0;
            }
            index
        }
        Direction::Previous => {
            let mut index = current_index - 1;
            if policy == OutOfBoundsPolicy::LoopWithinFolder && index < 0 {
                index = len - 1;
            }
            index
        }
    };

    if policy == OutOfBoundsPolicy::None
        && (candidate == current_index || candidate < 0 || candidate >= len)
    {
        return None;
    }

    // A single-file folder wraps onto itself under LoopWithinFolder.
    // 單一檔案的資料夾在循環策略下會回到自身。
    if policy == OutOfBoundsPolicy::LoopWithinFolder && candidate == current_index {
        candidate = match direction {
            Direction::Next => 0,
            Direction::Previous => len - 1,
        };
    }

    if policy == OutOfBoundsPolicy::AdvanceToAdjacentFolder && (candidate < 0 || candidate >= len) {
        return match direction {
            Direction::Next => folders::first_file_of_next_folder(current),
            Direction::Previous => folders::last_file_of_previous_folder(current),
        };
    }

    usize::try_from(candidate)
        .ok()
        .and_then(|index| files.get(index))
        .map(|name| directory.join(name))
}

/// First file of `directory` in sorted order, `None` when it has no files.
/// 回傳排序後目錄中的第一個檔案；目錄沒有檔案時回傳 `None`。
pub fn first_file(directory: &Path) -> Option<PathBuf> {
    let mut files = listing::files_in(directory);
    listing::sort_names(&mut files);
    files.first().map(|name| directory.join(name))
}

/// Last file of `directory` in sorted order, `None` when it has no files.
/// 回傳排序後目錄中的最後一個檔案；目錄沒有檔案時回傳 `None`。
pub fn last_file(directory: &Path) -> Option<PathBuf> {
    let mut files = listing::files_in(directory);
    listing::sort_names(&mut files);
    files.last().map(|name| directory.join(name))
}

// Certain host file-watchers spuriously append `.git` to reported paths;
// identity comparison runs on the stripped base name.
fn identity_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let stripped = name.strip_suffix(".git").unwrap_or(&name);
    Some(stripped.to_string())
}
