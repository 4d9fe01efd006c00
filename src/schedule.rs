/// Timer-style deferred events.
///
/// Nothing sleeps: an event becomes due once a later tick passes a `now_ms`
/// at or beyond its due time, and is handed back exactly once.
#[derive(Debug, Clone)]
pub struct Schedule<E> {
    pending: Vec<(f64, E)>,
}

impl<E> Schedule<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, due_ms: f64, event: E) {
        self.pending.push((due_ms, event));
    }

    /// Remove and return every event due at `now_ms`, earliest first.
    /// Events sharing a due time keep their scheduling order.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<(f64, E)> {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].0 <= now_ms {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        due
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl<E> Default for Schedule<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_fires_early() {
        let mut s = Schedule::new();
        s.schedule(150.0, "black");
        assert!(s.take_due(149.9).is_empty());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn fires_once_when_due() {
        let mut s = Schedule::new();
        s.schedule(150.0, "black");
        assert_eq!(s.take_due(400.0), vec![(150.0, "black")]);
        assert!(s.take_due(500.0).is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn due_events_come_back_in_time_order() {
        let mut s = Schedule::new();
        s.schedule(300.0, 'c');
        s.schedule(100.0, 'a');
        s.schedule(100.0, 'b');
        s.schedule(900.0, 'z');
        let due: Vec<char> = s.take_due(300.0).into_iter().map(|(_, e)| e).collect();
        assert_eq!(due, vec!['a', 'b', 'c']);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn clear_cancels_pending() {
        let mut s = Schedule::new();
        s.schedule(10.0, ());
        s.clear();
        assert!(s.take_due(1000.0).is_empty());
    }
}
