use std::collections::VecDeque;

/// Bounded FIFO of recent incoming messages, oldest first.
#[derive(Debug, Clone)]
pub struct ContextBuffer {
    messages: VecDeque<String>,
    capacity: usize,
}

impl ContextBuffer {
    /// `capacity` is clamped to at least one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append, evicting from the front until within capacity.
    pub fn push(&mut self, message: String) {
        self.messages.push_back(message);
        while self.messages.len() > self.capacity {
            self.messages.pop_front();
        }
    }

    /// Owned copy; later pushes or clears do not affect it.
    pub fn snapshot(&self) -> Vec<String> {
        self.messages.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
