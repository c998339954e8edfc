//! Configuration surface for FileFlow navigation.
//! FileFlow 導覽功能的偏好設定模組。

pub mod preferences;

pub use preferences::{NavigationPreferences, PreferencesError, PreferencesStore, PreviewMode};
