//! Transient success/error banners.
//!
//! Showing a notice replaces the current one and hands out a fresh id. The caller
//! schedules an expiry for that id; when it fires, the notice is cleared only if it is
//! still the one on display, so an old timer never cuts a newer notice short.

/// How long a notice stays on screen.
pub const NOTICE_DISPLAY_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier used by the banner.
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    /// Displays `text`, replacing any visible notice. Returns the id to expire later.
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice {
            id: self.next_id,
            kind,
            text: text.into(),
        });
        self.next_id
    }

    /// Clears the notice if `id` is still the visible one. Returns whether it was.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_clears_matching_notice() {
        let mut board = NoticeBoard::default();
        let id = board.show(NoticeKind::Success, "Resource added successfully!");

        assert_eq!(board.current().map(|n| n.text.as_str()), Some("Resource added successfully!"));
        assert!(board.expire(id));
        assert!(board.current().is_none());
    }

    #[test]
    fn stale_expiry_leaves_newer_notice_alone() {
        let mut board = NoticeBoard::default();
        let first = board.show(NoticeKind::Success, "first");
        let second = board.show(NoticeKind::Error, "second");

        assert!(!board.expire(first));
        assert_eq!(board.current().map(|n| n.id), Some(second));
        assert!(board.expire(second));
    }

    #[test]
    fn expiring_twice_is_harmless() {
        let mut board = NoticeBoard::default();
        let id = board.show(NoticeKind::Error, "oops");

        assert!(board.expire(id));
        assert!(!board.expire(id));
        assert!(board.current().is_none());
    }
}
