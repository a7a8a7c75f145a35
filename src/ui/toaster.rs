use std::collections::VecDeque;

use crate::state::Notice;

/// How many notices stay visible at once.
pub const VISIBLE_NOTICES: usize = 3;

/// Queue of pending notices. Oldest entries drop off once it is full.
#[derive(Debug, Default)]
pub struct Toaster {
    queue: VecDeque<Notice>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        if self.queue.len() == VISIBLE_NOTICES {
            self.queue.pop_front();
        }
        self.queue.push_back(notice);
    }

    pub fn extend(&mut self, notices: impl IntoIterator<Item = Notice>) {
        for notice in notices {
            self.push(notice);
        }
    }

    /// Removes and returns everything queued, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
