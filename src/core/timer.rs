//! Cancelable one-shot timers driven by the host frame loop.
//!
//! Engines never sleep. They schedule an event `delay_ms` into the future and
//! the host calls [`TimerQueue::advance`] with the elapsed frame time; due
//! events come back in the order they fall due. Every schedule returns a
//! [`TimerHandle`] so a pending event can be dropped before it fires, and
//! [`TimerQueue::cancel_all`] clears everything on teardown.

/// Opaque handle to a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct PendingTimer<E> {
    handle: TimerHandle,
    due_ms: u64,
    event: E,
}

/// A queue of pending one-shot events keyed by due time.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    now_ms: u64,
    next_id: u64,
    pending: Vec<PendingTimer<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Milliseconds of host time this queue has observed.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `event` to fire once `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            handle,
            due_ms: self.now_ms.saturating_add(delay_ms),
            event,
        });
        handle
    }

    /// Drop a pending event. Returns false if it already fired or was canceled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.handle != handle);
        self.pending.len() != before
    }

    /// Drop every pending event.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|t| t.handle == handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Move the clock forward and return the events that fell due.
    ///
    /// Events are ordered by due time; ties keep scheduling order.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<E> {
        self.now_ms = self.now_ms.saturating_add(dt_ms);
        let now = self.now_ms;

        let mut due: Vec<PendingTimer<E>> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_ms <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }

        // Stable sort keeps scheduling order between equal due times.
        due.sort_by_key(|t| t.due_ms);
        due.into_iter().map(|t| t.event).collect()
    }
}
