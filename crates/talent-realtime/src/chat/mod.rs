//! Room session and its side channels.

pub mod draft;
pub mod history;
pub mod log;
pub mod notice;
pub mod session;

#[cfg(test)]
mod testing;

pub use draft::DraftStore;
pub use history::ChatHistory;
pub use log::MessageLog;
pub use notice::{Notice, NoticeLevel};
pub use session::{ChatSession, ChatUpdate};
