use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Identifies one particular arming of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle<K> {
    pub kind: K,
    generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline: Instant,
    generation: u64,
}

/// One-shot deadlines, at most one pending per kind.
///
/// Re-arming a kind replaces its pending deadline, so a superseded arming can
/// never fire. Nothing runs on its own: the owner calls `take_due` from its
/// tick and handles whatever came due.
#[derive(Debug)]
pub struct TimerManager<K> {
    pending: HashMap<K, Pending>,
    next_generation: u64,
}

impl<K> Default for TimerManager<K> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
            next_generation: 0,
        }
    }
}

impl<K: Copy + Eq + Hash> TimerManager<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind` to fire `delay` after `now`, replacing any pending arming
    pub fn schedule(&mut self, kind: K, now: Instant, delay: Duration) -> TimerHandle<K> {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.pending.insert(
            kind,
            Pending {
                deadline: now + delay,
                generation,
            },
        );
        TimerHandle { kind, generation }
    }

    /// Disarm `kind`. Returns false if nothing was pending.
    pub fn cancel(&mut self, kind: K) -> bool {
        self.pending.remove(&kind).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, kind: K) -> bool {
        self.pending.contains_key(&kind)
    }

    /// Whether `handle` is still the live arming of its kind
    pub fn is_current(&self, handle: &TimerHandle<K>) -> bool {
        self.pending
            .get(&handle.kind)
            .is_some_and(|p| p.generation == handle.generation)
    }

    #[cfg(test)]
    pub fn deadline(&self, kind: K) -> Option<Instant> {
        self.pending.get(&kind).map(|p| p.deadline)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every kind whose deadline is at or before `now`,
    /// earliest first. Ties keep arming order.
    pub fn take_due(&mut self, now: Instant) -> Vec<K> {
        let mut due: Vec<(K, Pending)> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(k, p)| (*k, *p))
            .collect();
        due.sort_by_key(|(_, p)| (p.deadline, p.generation));

        for (kind, _) in &due {
            self.pending.remove(kind);
        }
        due.into_iter().map(|(kind, _)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Kind {
        A,
        B,
        C,
    }

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_once_when_due() {
        let mut timers = TimerManager::new();
        let t0 = Instant::now();
        timers.schedule(Kind::A, t0, 100 * MS);

        assert!(timers.take_due(t0 + 99 * MS).is_empty());
        assert_eq!(timers.take_due(t0 + 100 * MS), vec![Kind::A]);
        assert!(timers.take_due(t0 + 500 * MS).is_empty());
        assert!(timers.is_empty());
    }

    #[test]
    fn test_rescheduling_replaces_pending_deadline() {
        let mut timers = TimerManager::new();
        let t0 = Instant::now();
        let first = timers.schedule(Kind::A, t0, 3000 * MS);
        let second = timers.schedule(Kind::A, t0 + 2000 * MS, 3000 * MS);

        assert!(!timers.is_current(&first));
        assert!(timers.is_current(&second));
        assert_eq!(timers.len(), 1);

        // The first arming's deadline passes without firing
        assert!(timers.take_due(t0 + 3000 * MS).is_empty());
        assert_eq!(timers.take_due(t0 + 5000 * MS), vec![Kind::A]);
    }

    #[test]
    fn test_due_order_is_by_deadline() {
        let mut timers = TimerManager::new();
        let t0 = Instant::now();
        timers.schedule(Kind::C, t0, 30 * MS);
        timers.schedule(Kind::A, t0, 10 * MS);
        timers.schedule(Kind::B, t0, 20 * MS);

        assert_eq!(timers.next_deadline(), Some(t0 + 10 * MS));
        assert_eq!(
            timers.take_due(t0 + 60 * MS),
            vec![Kind::A, Kind::B, Kind::C]
        );
    }

    #[test]
    fn test_cancel_and_cancel_all() {
        let mut timers = TimerManager::new();
        let t0 = Instant::now();
        timers.schedule(Kind::A, t0, MS);
        timers.schedule(Kind::B, t0, MS);

        assert!(timers.cancel(Kind::A));
        assert!(!timers.cancel(Kind::A));
        assert!(timers.is_pending(Kind::B));

        timers.cancel_all();
        assert!(timers.take_due(t0 + 10 * MS).is_empty());
        assert_eq!(timers.next_deadline(), None);
    }
}
