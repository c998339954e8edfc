//! Host-session glue for FileFlow navigation commands.
//! FileFlow 導覽指令與宿主編輯器之間的整合層。

pub mod commands;
pub mod session;

pub use commands::{
    CommandOutcome, NavigationCommand, NavigationPrompt, NavigationSession, Notice, OpenRequest,
};
pub use session::{CurrentPathTracker, DocumentHost, HostDocument};
