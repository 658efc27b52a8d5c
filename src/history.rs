//! Bounded, newest-first log of generated picks.
//!
//! Reads never fail: a missing key, unparsable JSON, or a non-array value all
//! load as an empty history. Inside an array, entries that do not decode to a
//! full pick of valid games are dropped individually and the rest are kept.
//! The bound is applied when saving, never when loading.

use serde_json::Value;
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::config::PickerConfig;
use crate::error::{LottoError, Result};
use crate::storage::KeyValueStore;
use crate::types::{History, HistoryEntry, Pick, GAMES_PER_PICK};

pub struct HistoryStore<S, C> {
    store: S,
    clock: C,
    key: String,
    limit: usize,
}

impl<S: KeyValueStore, C: Clock> HistoryStore<S, C> {
    pub fn new(store: S, clock: C, key: impl Into<String>, limit: usize) -> Self {
        Self {
            store,
            clock,
            key: key.into(),
            limit,
        }
    }

    pub fn from_config(store: S, clock: C, config: &PickerConfig) -> Self {
        Self::new(store, clock, config.history_key.clone(), config.history_limit)
    }

    pub fn load(&self) -> History {
        let Some(raw) = self.store.get(&self.key) else {
            return History::new();
        };

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                warn!(key = %self.key, "stored history is not an array, ignoring");
                return History::new();
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "stored history is not valid JSON, ignoring");
                return History::new();
            }
        };

        let total = items.len();
        let history: History = items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<HistoryEntry>(item).ok())
            .filter(HistoryEntry::is_well_formed)
            .collect();

        let dropped = total - history.len();
        if dropped > 0 {
            warn!(key = %self.key, dropped, kept = history.len(), "dropped malformed history entries");
        }
        history
    }

    /// Record `pick` as the newest entry and persist the bounded history.
    /// Rejects picks that `load` would drop, leaving storage untouched.
    pub fn append(&self, pick: &Pick) -> Result<History> {
        let entry = HistoryEntry::new(pick.clone(), self.clock.now_millis());
        if !entry.is_well_formed() {
            return Err(LottoError::InvalidPick(format!(
                "expected {} valid games, got {:?}",
                GAMES_PER_PICK, pick
            )));
        }

        let mut history = self.load();
        history.insert(0, entry);
        history.truncate(self.limit);
        self.save(&history)?;
        debug!(entries = history.len(), "appended pick to history");
        Ok(history)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.key)?;
        debug!(key = %self.key, "cleared history");
        Ok(())
    }

    fn save(&self, history: &[HistoryEntry]) -> Result<()> {
        let bounded = &history[..history.len().min(self.limit)];
        let json = serde_json::to_string(bounded)?;
        self.store.set(&self.key, &json).inspect_err(|err| {
            warn!(key = %self.key, error = %err, "failed to persist history");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::generator::generate_pick;
    use crate::rng::WasmRng;
    use crate::storage::MemoryStore;
    use crate::types::{demo_pick, Game};

    const KEY: &str = "lotto.history.v1";

    fn make_store() -> (HistoryStore<MemoryStore, FixedClock>, MemoryStore) {
        let backing = MemoryStore::new();
        let history = HistoryStore::new(backing.clone(), FixedClock::new(1_000), KEY, 20);
        (history, backing)
    }

    fn distinct_picks(count: usize) -> Vec<Pick> {
        let mut rng = WasmRng::from_seed(2024);
        (0..count).map(|_| generate_pick(false, &mut rng).unwrap()).collect()
    }

    #[test]
    fn test_empty_store_loads_empty() {
        let (history, _) = make_store();
        assert!(history.load().is_empty());
    }

    #[test]
    fn test_append_then_load() {
        let (history, _) = make_store();
        let mut rng = WasmRng::from_seed(42);
        let pick = generate_pick(true, &mut rng).unwrap();

        let returned = history.append(&pick).unwrap();
        let loaded = history.load();

        assert_eq!(returned, loaded);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].games(), &pick[..]);
        assert_eq!(loaded[0].created_at(), 1_000);
    }

    #[test]
    fn test_load_is_idempotent() {
        let (history, _) = make_store();
        history.append(&demo_pick()).unwrap();
        assert_eq!(history.load(), history.load());
    }

    #[test]
    fn test_newest_first() {
        let (history, _) = make_store();
        let picks = distinct_picks(2);
        let (a, b) = (&picks[0], &picks[1]);

        history.append(a).unwrap();
        history.clock.advance(10);
        history.append(b).unwrap();

        let loaded = history.load();
        assert_eq!(loaded[0].games(), &b[..]);
        assert_eq!(loaded[1].games(), &a[..]);
        assert!(loaded[0].created_at() > loaded[1].created_at());
    }

    #[test]
    fn test_bound_after_many_appends() {
        let (history, _) = make_store();
        let picks = distinct_picks(25);
        for (i, pick) in picks.iter().enumerate() {
            history.append(pick).unwrap();
            assert_eq!(history.load().len(), (i + 1).min(20));
        }

        let loaded = history.load();
        // Newest is the last pick, oldest kept is the sixth; the first five are gone.
        assert_eq!(loaded[0].games(), &picks[24][..]);
        assert_eq!(loaded[19].games(), &picks[5][..]);
        for old in &picks[..5] {
            assert!(loaded.iter().all(|e| e.games() != &old[..]));
        }
    }

    #[test]
    fn test_full_store_drops_oldest() {
        let (history, _) = make_store();
        let picks = distinct_picks(21);
        for pick in &picks[..20] {
            history.append(pick).unwrap();
        }
        let before = history.load();
        let oldest = before[19].clone();

        let y = &picks[20];
        history.append(y).unwrap();

        let after = history.load();
        assert_eq!(after.len(), 20);
        assert_eq!(after[0].games(), &y[..]);
        assert!(!after.contains(&oldest));
        assert_eq!(after[19], before[18]);
    }

    #[test]
    fn test_append_rejects_malformed_pick() {
        let (history, backing) = make_store();
        history.append(&demo_pick()).unwrap();
        let before = backing.get(KEY);

        let short = demo_pick()[..3].to_vec();
        assert!(matches!(history.append(&short), Err(LottoError::InvalidPick(_))));

        let mut dup_bonus = demo_pick();
        dup_bonus[2] = Game { main: [1, 2, 3, 4, 5, 6], bonus: 6 };
        assert!(matches!(history.append(&dup_bonus), Err(LottoError::InvalidPick(_))));

        assert_eq!(backing.get(KEY), before);
        let loaded = history.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].games(), &demo_pick()[..]);
    }

    #[test]
    fn test_clear() {
        let (history, backing) = make_store();
        history.append(&demo_pick()).unwrap();
        history.clear().unwrap();
        assert!(history.load().is_empty());
        assert_eq!(backing.get(KEY), None);
    }

    #[test]
    fn test_malformed_json_loads_empty() {
        let (history, backing) = make_store();
        backing.set(KEY, "{not json").unwrap();
        assert!(history.load().is_empty());
    }

    #[test]
    fn test_non_array_loads_empty() {
        let (history, backing) = make_store();
        backing.set(KEY, r#"{"games":[]}"#).unwrap();
        assert!(history.load().is_empty());
        backing.set(KEY, "42").unwrap();
        assert!(history.load().is_empty());
    }

    #[test]
    fn test_malformed_entries_dropped_individually() {
        let (history, backing) = make_store();
        history.append(&demo_pick()).unwrap();
        let good = backing.get(KEY).unwrap();
        let good_entry = good.trim_start_matches('[').trim_end_matches(']');

        let raw = format!(
            r#"[{good}, {{"at": 5}}, {{"games": [{{"main": [1,2,3], "bonus": 4}}], "at": 6}}, "junk", {good}]"#,
            good = good_entry
        );
        backing.set(KEY, &raw).unwrap();

        let loaded = history.load();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.iter().all(|e| e.games() == &demo_pick()[..]));
    }

    #[test]
    fn test_invalid_game_values_dropped() {
        let (history, backing) = make_store();
        // bonus duplicates a main number
        let bad_game = r#"{"main":[1,2,3,4,5,6],"bonus":6}"#;
        let ok_game = r#"{"main":[1,2,3,4,5,6],"bonus":7}"#;
        let raw = format!(
            r#"[{{"games":[{b},{o},{o},{o},{o}],"at":1}},{{"games":[{o},{o},{o},{o},{o}],"at":2}}]"#,
            b = bad_game,
            o = ok_game
        );
        backing.set(KEY, &raw).unwrap();

        let loaded = history.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].created_at(), 2);
    }

    #[test]
    fn test_oversized_stored_history_not_truncated_on_load() {
        let backing = MemoryStore::new();
        let wide = HistoryStore::new(backing.clone(), FixedClock::new(0), KEY, 30);
        for _ in 0..25 {
            wide.append(&demo_pick()).unwrap();
        }

        let narrow = HistoryStore::new(backing.clone(), FixedClock::new(0), KEY, 20);
        assert_eq!(narrow.load().len(), 25);

        narrow.append(&demo_pick()).unwrap();
        assert_eq!(narrow.load().len(), 20);
    }

    #[test]
    fn test_write_failure_surfaces() {
        let (history, backing) = make_store();
        history.append(&demo_pick()).unwrap();
        backing.set_fail_writes(true);

        let err = history.append(&demo_pick()).unwrap_err();
        assert!(matches!(err, LottoError::StorageWrite(_)));
        assert!(history.clear().is_err());
        // Previous state is untouched.
        assert_eq!(history.load().len(), 1);
    }
}
