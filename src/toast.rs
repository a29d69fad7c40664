use std::collections::VecDeque;

use crate::contact::Notice;

/// Only the newest toast is kept on screen.
pub const TOAST_LIMIT: usize = 1;
pub const TOAST_DURATION_MS: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push_front(Toast { id, notice });
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let len = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != len
    }

    /// Newest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(title: &str) -> Notice {
        Notice {
            title: title.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_push_keeps_newest() {
        let mut q = ToastQueue::new();
        let first = q.push(notice("one"));
        let second = q.push(notice("two"));
        assert_ne!(first, second);
        assert_eq!(q.len(), 1);
        let shown = q.toasts().next().expect("a toast should be shown");
        assert_eq!(shown.id, second);
        assert_eq!(shown.notice.title, "two");
    }

    #[test]
    fn test_dismiss() {
        let mut q = ToastQueue::new();
        let id = q.push(notice("one"));
        assert!(q.dismiss(id));
        assert!(q.is_empty());
        assert!(!q.dismiss(id));
    }

    #[test]
    fn test_dismiss_evicted_id_is_noop() {
        let mut q = ToastQueue::new();
        let old = q.push(notice("one"));
        let new = q.push(notice("two"));
        assert!(!q.dismiss(old));
        assert_eq!(q.toasts().map(|t| t.id).collect::<Vec<_>>(), vec![new]);
    }

    #[test]
    fn test_repeated_sent_notices() {
        let mut q = ToastQueue::new();
        q.push(Notice::message_sent());
        q.push(Notice::message_sent());
        assert_eq!(q.len(), 1);
        assert_eq!(
            q.toasts().next().map(|t| t.notice.title.as_str()),
            Some("Message sent!")
        );
    }
}
