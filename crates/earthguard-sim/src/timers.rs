//! Deferred actions keyed on the tick clock.
//!
//! A min-heap of `(fire_tick, seq)` entries. Entries due at or before the
//! current tick pop in expiry order; ties pop in scheduling order. Repeating
//! entries re-enter the heap with the same id after each firing.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hecs::Entity;

/// Handle for cancelling a scheduled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Everything the simulation defers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerAction {
    /// Run the enemy spawner once.
    SpawnTick,
    /// Apply mega blast damage to the mothership.
    MothershipStrike { damage: f64 },
    /// Multishot runs out.
    MultishotExpire,
    /// A pickup starts drifting toward the defender.
    AttractPickup(Entity),
    /// An enemy whose shot resolved may fire again.
    ReleaseEnemyFire(Entity),
}

#[derive(Debug)]
struct Entry {
    fire_tick: u64,
    seq: u64,
    id: TimerId,
    repeat_ticks: Option<u64>,
    action: TimerAction,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_tick == other.fire_tick && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the BinaryHeap (a max-heap) yields the earliest entry.
    fn cmp(&self, other: &Self) -> Ordering {
        (other.fire_tick, other.seq).cmp(&(self.fire_tick, self.seq))
    }
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `action` once, `delay_ticks` after `now`.
    pub fn schedule(&mut self, now: u64, delay_ticks: u64, action: TimerAction) -> TimerId {
        self.push(now + delay_ticks, None, action)
    }

    /// Fire `action` every `interval_ticks` (minimum one), first at
    /// `now + interval_ticks`.
    pub fn schedule_repeating(
        &mut self,
        now: u64,
        interval_ticks: u64,
        action: TimerAction,
    ) -> TimerId {
        let interval = interval_ticks.max(1);
        self.push(now + interval, Some(interval), action)
    }

    /// Cancel a pending action. Returns whether anything was removed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.heap.len();
        self.heap.retain(|entry| entry.id != id);
        self.heap.len() != before
    }

    /// Drop every pending action.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.heap.iter().any(|entry| entry.id == id)
    }

    /// Tick at which `id` next fires, if pending.
    pub fn fire_tick(&self, id: TimerId) -> Option<u64> {
        self.heap
            .iter()
            .filter(|entry| entry.id == id)
            .map(|entry| entry.fire_tick)
            .min()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pop the earliest action due at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(TimerId, TimerAction)> {
        if self.heap.peek()?.fire_tick > now {
            return None;
        }
        let entry = self.heap.pop()?;
        if let Some(interval) = entry.repeat_ticks {
            let seq = self.bump_seq();
            self.heap.push(Entry {
                fire_tick: entry.fire_tick + interval,
                seq,
                id: entry.id,
                repeat_ticks: entry.repeat_ticks,
                action: entry.action,
            });
        }
        Some((entry.id, entry.action))
    }

    fn push(&mut self, fire_tick: u64, repeat_ticks: Option<u64>, action: TimerAction) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.heap.push(Entry {
            fire_tick,
            seq,
            id,
            repeat_ticks,
            action,
        });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
