#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// How long a notice stays on screen before auto-dismissal.
pub const NOTICE_TTL_MS: u64 = 3000;

/// Severity of a transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A single toast-style notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Queue of transient notices rendered by the notice tray.
///
/// Notices are fire-and-forget UI signals: pushing one never fails and
/// callers do not wait on dismissal.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    pub fn push_error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, message.into())
    }

    pub fn push_success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, message.into())
    }

    fn push(&mut self, level: NoticeLevel, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, level, message });
        id
    }

    /// Remove a notice by id. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
