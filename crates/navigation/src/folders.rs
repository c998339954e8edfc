use std::path::{Path, PathBuf};

use crate::listing;
use crate::resolver;

/// Resolves the first file of the folder after the current file's folder.
/// 尋找目前資料夾之後一個兄弟資料夾中的第一個檔案。
///
/// Sibling folders are the directories one parent level up, sorted
/// case-insensitively. Looks exactly one folder over: an adjacent folder
/// with no files yields `None` instead of continuing to the one after it.
pub fn first_file_of_next_folder(current: &Path) -> Option<PathBuf> {
    let (parent, siblings, index) = sibling_folders(current)?;
    let next = siblings.get(index + 1)?;
    resolver::first_file(&parent.join(next))
}

/// Resolves the last file of the folder before the current file's folder.
/// 尋找目前資料夾之前一個兄弟資料夾中的最後一個檔案。
///
/// Symmetric to [`first_file_of_next_folder`], with the same
/// one-folder-over limit.
pub fn last_file_of_previous_folder(current: &Path) -> Option<PathBuf> {
    let (parent, siblings, index) = sibling_folders(current)?;
    let previous = index.checked_sub(1).and_then(|index| siblings.get(index))?;
    resolver::last_file(&parent.join(previous))
}

/// Lists the sorted sibling folders of the current file's folder and the
/// folder's own position among them.
/// 列出目前資料夾的兄弟資料夾（排序後）及其在其中的位置。
fn sibling_folders(current: &Path) -> Option<(PathBuf, Vec<String>, usize)> {
    let folder = current.parent()?;
    let parent = folder.parent()?;
    let folder_name = folder.file_name()?.to_string_lossy().into_owned();

    let mut siblings = listing::folders_in(parent);
    listing::sort_names(&mut siblings);
    let index = siblings.iter().position(|name| *name == folder_name)?;
    Some((parent.to_path_buf(), siblings, index))
}
