use std::fs;
use std::path::Path;

/// 列出目錄中的直接檔案項目。 / Lists the immediate file entries of a directory.
///
/// Unreadable directories degrade to an empty listing; the failure is
/// logged and never propagated. Entries are returned in directory order.
pub fn files_in(directory: &Path) -> Vec<String> {
    entries_in(directory, |file_type| file_type.is_file())
}

/// 列出目錄中的直接子資料夾。 / Lists the immediate subfolders of a directory.
pub fn folders_in(directory: &Path) -> Vec<String> {
    entries_in(directory, |file_type| file_type.is_dir())
}

/// 以不分大小寫的字典序排序名稱。 / Sorts names case-insensitively by lexicographic order.
pub fn sort_names(names: &mut [String]) {
    names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
}

fn entries_in(directory: &Path, keep: impl Fn(&fs::FileType) -> bool) -> Vec<String> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("failed to read directory {}: {err}", directory.display());
            return Vec::new();
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("failed to read entry in {}: {err}", directory.display());
                continue;
            }
        };
        match entry.file_type() {
            Ok(file_type) if keep(&file_type) => {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
            Ok(_) => {}
            Err(err) => {
                log::debug!("failed to stat {}: {err}", entry.path().display());
            }
        }
    }
    names
}
