use crate::models::SelectionState;

use super::messages::RefreshRequest;

/// Single-slot, last-write-wins mailbox for refresh requests.
///
/// A new request replaces whatever is pending, so a burst of UI edits
/// collapses into one rebuild from the newest snapshot.
#[derive(Debug, Default)]
pub struct RefreshQueue {
    pending: Option<RefreshRequest>,
    next_generation: u64,
    superseded: u64,
}

impl RefreshQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `selection` and returns its generation.
    pub fn request(&mut self, selection: SelectionState) -> u64 {
        self.next_generation += 1;
        if self.pending.is_some() {
            self.superseded += 1;
        }
        self.pending = Some(RefreshRequest {
            generation: self.next_generation,
            selection,
        });
        self.next_generation
    }

    /// Newest pending request, if any. Older ones are already gone.
    pub fn take(&mut self) -> Option<RefreshRequest> {
        self.pending.take()
    }

    /// Requests dropped because a newer one arrived before they were taken.
    pub fn superseded(&self) -> u64 {
        self.superseded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_request_wins() {
        let mut queue = RefreshQueue::new();
        let mut first = SelectionState::default();
        first.rebase = false;
        let second = SelectionState::default();

        queue.request(first);
        let generation = queue.request(second.clone());

        let taken = queue.take().unwrap();
        assert_eq!(taken.generation, generation);
        assert_eq!(taken.selection, second);
        assert_eq!(queue.superseded(), 1);
        assert!(queue.take().is_none());
    }

    #[test]
    fn generations_increase() {
        let mut queue = RefreshQueue::new();
        let a = queue.request(SelectionState::default());
        queue.take();
        let b = queue.request(SelectionState::default());
        assert!(b > a);
        assert_eq!(queue.take().map(|r| r.generation), Some(b));
        assert_eq!(queue.superseded(), 0);
    }
}
