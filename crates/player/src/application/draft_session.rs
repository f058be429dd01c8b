//! Draft session - the reactive core of one drafting flow
//!
//! Single source of truth for the point-set collection, selection,
//! search/filter criteria, and pagination. All mutations flow through
//! named actions; each action applies its change synchronously, saves
//! the point-set list through the store (write-through persistence),
//! and then notifies every subscriber exactly once.
//!
//! The session is an explicit session-scoped object passed by reference
//! to its consumers - it is constructed once per lobby session and
//! discarded with it, never a process-wide singleton. Notification is
//! single-threaded and unbatched: the UI issues one action per user
//! gesture, so no reentrancy guard is needed.

use std::collections::BTreeSet;
use std::rc::Rc;

use vanguard_domain::filter::FilterSelection;
use vanguard_domain::PointSet;

use crate::application::point_set_store::PointSetStore;
use crate::ports::outbound::StorageProvider;

/// Point sets shown per page in the list panel
pub const PAGE_SIZE: usize = 5;

/// Handle returned by `on_change`, used to unsubscribe
pub type SubscriptionId = u64;

/// One drafting session's state
pub struct DraftSession<S: StorageProvider> {
    /// Newest first; creation and duplication prepend
    point_sets: Vec<PointSet>,
    /// Id of the active point set; `None` only while `point_sets` is empty
    selected_set_id: Option<String>,
    /// Id of the piece shown in the detail panel
    selected_piece_id: Option<String>,
    /// 1-based pagination cursor over `point_sets`
    page_index: usize,
    /// Free-text filter over the piece grid
    search_query: String,
    /// Active rank/base facet toggles
    filters: FilterSelection,
    store: PointSetStore<S>,
    subscribers: Vec<(SubscriptionId, Rc<dyn Fn()>)>,
    next_subscription: SubscriptionId,
}

impl<S: StorageProvider> DraftSession<S> {
    /// Rebuild a session from persisted state. Selects the first point
    /// set when any exist.
    pub fn new(store: PointSetStore<S>) -> Self {
        let point_sets = store.load();
        let selected_set_id = point_sets.first().map(|set| set.id.clone());
        Self {
            point_sets,
            selected_set_id,
            selected_piece_id: None,
            page_index: 1,
            search_query: String::new(),
            filters: FilterSelection::default(),
            store,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register a change observer, invoked after every mutating action.
    pub fn on_change(&mut self, callback: impl Fn() + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Rc::new(callback)));
        id
    }

    /// Drop a previously registered observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Write-through save plus one notification round. Every mutating
    /// action ends here exactly once.
    fn commit(&mut self) {
        self.store.save(&self.point_sets);
        let subscribers: Vec<Rc<dyn Fn()>> = self
            .subscribers
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in subscribers {
            callback();
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn point_sets(&self) -> &[PointSet] {
        &self.point_sets
    }

    pub fn selected_set_id(&self) -> Option<&str> {
        self.selected_set_id.as_deref()
    }

    /// The active point set, when one is selected
    pub fn selected_set(&self) -> Option<&PointSet> {
        let id = self.selected_set_id.as_deref()?;
        self.point_sets.iter().find(|set| set.id == id)
    }

    pub fn selected_piece_id(&self) -> Option<&str> {
        self.selected_piece_id.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Number of pages, at least 1
    pub fn page_count(&self) -> usize {
        self.point_sets.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// The point sets visible on the current page
    pub fn visible_sets(&self) -> &[PointSet] {
        let start = (self.page_index - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.point_sets.len());
        if start >= self.point_sets.len() {
            &[]
        } else {
            &self.point_sets[start..end]
        }
    }

    // -------------------------------------------------------------------------
    // Actions - each mutates, saves, and notifies once
    // -------------------------------------------------------------------------

    /// Select a point set and move pagination so it is visible.
    pub fn select_set(&mut self, id: &str) {
        if !self.point_sets.iter().any(|set| set.id == id) {
            return;
        }
        self.selected_set_id = Some(id.to_string());
        self.reveal_selected();
        self.commit();
    }

    /// Select a piece for the detail panel.
    pub fn select_piece(&mut self, id: &str) {
        self.selected_piece_id = Some(id.to_string());
        self.commit();
    }

    /// Insert a point set at the front, select it, and jump to page 1.
    pub fn add_set(&mut self, set: PointSet) {
        self.selected_set_id = Some(set.id.clone());
        self.point_sets.insert(0, set);
        self.page_index = 1;
        self.commit();
    }

    /// Create a fresh point set with default name and total.
    pub fn create_set(&mut self) -> String {
        let set = PointSet::new();
        let id = set.id.clone();
        self.add_set(set);
        id
    }

    /// Create a fresh point set with the given budget total.
    pub fn create_set_with_total(&mut self, total_points: f64) -> String {
        let set = PointSet::with_total(total_points);
        let id = set.id.clone();
        self.add_set(set);
        id
    }

    /// Copy an existing point set; the copy is prepended and selected.
    pub fn duplicate_set(&mut self, id: &str) {
        let Some(copy) = self
            .point_sets
            .iter()
            .find(|set| set.id == id)
            .map(PointSet::duplicate)
        else {
            return;
        };
        self.add_set(copy);
    }

    /// Remove a point set. When the selected one is deleted, selection
    /// moves to the new first set (or away entirely), and the page is
    /// re-clamped to keep the selection visible.
    pub fn delete_set(&mut self, id: &str) {
        let before = self.point_sets.len();
        self.point_sets.retain(|set| set.id != id);
        if self.point_sets.len() == before {
            return;
        }

        if self.selected_set_id.as_deref() == Some(id) {
            self.selected_set_id = self.point_sets.first().map(|set| set.id.clone());
        }
        self.reveal_selected();
        self.commit();
    }

    /// Rename a point set; blank input falls back to "Point set".
    pub fn rename_set(&mut self, id: &str, name: &str) {
        let Some(set) = self.point_sets.iter_mut().find(|set| set.id == id) else {
            return;
        };
        set.rename(name);
        self.commit();
    }

    /// Change a point set's budget total. Costs are kept; the remaining
    /// balance simply reflects the new total.
    pub fn set_total_points(&mut self, id: &str, total_points: f64) {
        let Some(set) = self.point_sets.iter_mut().find(|set| set.id == id) else {
            return;
        };
        set.total_points = total_points;
        self.commit();
    }

    /// Assign a per-piece cost from raw input (see `PointSet::set_cost`).
    pub fn set_cost(&mut self, set_id: &str, piece_id: &str, raw_value: &str) {
        let Some(set) = self.point_sets.iter_mut().find(|set| set.id == set_id) else {
            return;
        };
        set.set_cost(piece_id, raw_value);
        self.commit();
    }

    /// Update the free-text piece filter.
    pub fn set_search_query(&mut self, text: &str) {
        self.search_query = text.to_string();
        self.commit();
    }

    /// Replace the active facet toggles.
    pub fn set_filters(&mut self, ranks: BTreeSet<String>, bases: BTreeSet<String>) {
        self.filters = FilterSelection { ranks, bases };
        self.commit();
    }

    /// Move pagination, clamped to `[1, page_count]`.
    pub fn set_page(&mut self, page: i64) {
        self.page_index = clamp_page(page, self.page_count());
        self.commit();
    }

    // -------------------------------------------------------------------------
    // Pagination helpers
    // -------------------------------------------------------------------------

    /// Point the cursor at the selected set's page, or just re-clamp when
    /// nothing is selected.
    fn reveal_selected(&mut self) {
        let position = self.selected_set_id.as_deref().and_then(|id| {
            self.point_sets.iter().position(|set| set.id == id)
        });
        self.page_index = match position {
            Some(position) => position / PAGE_SIZE + 1,
            None => clamp_page(self.page_index as i64, self.page_count()),
        };
    }
}

fn clamp_page(page: i64, page_count: usize) -> usize {
    page.clamp(1, page_count as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockStorageProvider;
    use crate::ports::outbound::storage_keys;
    use std::cell::Cell;
    use vanguard_domain::budget;

    fn session() -> DraftSession<MockStorageProvider> {
        DraftSession::new(PointSetStore::new(MockStorageProvider::default()))
    }

    #[test]
    fn test_create_prepends_selects_and_resets_page() {
        let mut session = session();
        let first = session.create_set();
        let second = session.create_set();

        assert_eq!(session.point_sets()[0].id, second);
        assert_eq!(session.point_sets()[1].id, first);
        assert_eq!(session.selected_set_id(), Some(second.as_str()));
        assert_eq!(session.page_index(), 1);
    }

    #[test]
    fn test_delete_selected_never_dangles() {
        let mut session = session();
        let first = session.create_set();
        let second = session.create_set();

        session.delete_set(&second);
        assert_eq!(session.selected_set_id(), Some(first.as_str()));

        session.delete_set(&first);
        assert_eq!(session.selected_set_id(), None);
        assert!(session.point_sets().is_empty());
        assert_eq!(session.page_index(), 1);
    }

    #[test]
    fn test_delete_unselected_keeps_selection() {
        let mut session = session();
        let first = session.create_set();
        let second = session.create_set();

        session.delete_set(&first);
        assert_eq!(session.selected_set_id(), Some(second.as_str()));
    }

    #[test]
    fn test_duplicate_applies_add_semantics() {
        let mut session = session();
        let original = session.create_set();
        session.rename_set(&original, "Siege");
        session.set_cost(&original, "pawn", "2");

        session.duplicate_set(&original);
        let copy = &session.point_sets()[0];
        assert_ne!(copy.id, original);
        assert_eq!(copy.name, "Siege (copy)");
        assert_eq!(copy.cost("pawn"), 2.0);
        assert_eq!(session.selected_set_id(), Some(copy.id.as_str()));
    }

    #[test]
    fn test_set_cost_moves_remaining_exactly() {
        let mut session = session();
        let id = session.create_set_with_total(40.0);

        session.set_cost(&id, "pawn", "1.256");
        let set = session.selected_set().expect("selected");
        assert_eq!(set.cost("pawn"), 1.26);
        assert_eq!(budget::remaining(set), 38.74);

        session.set_cost(&id, "pawn", "3");
        let set = session.selected_set().expect("selected");
        assert_eq!(budget::remaining(set), 37.0);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut session = session();
        for _ in 0..7 {
            session.create_set();
        }
        assert_eq!(session.page_count(), 2);

        session.set_page(99);
        assert_eq!(session.page_index(), 2);
        session.set_page(0);
        assert_eq!(session.page_index(), 1);
        session.set_page(-3);
        assert_eq!(session.page_index(), 1);
    }

    #[test]
    fn test_select_reveals_page() {
        let mut session = session();
        let mut ids = Vec::new();
        for _ in 0..7 {
            ids.push(session.create_set());
        }

        // Oldest set sits at the end of the list, on page 2
        session.select_set(&ids[0]);
        assert_eq!(session.page_index(), 2);

        session.select_set(&ids[6]);
        assert_eq!(session.page_index(), 1);
    }

    #[test]
    fn test_visible_sets_follow_page() {
        let mut session = session();
        for _ in 0..7 {
            session.create_set();
        }

        assert_eq!(session.visible_sets().len(), PAGE_SIZE);
        session.set_page(2);
        assert_eq!(session.visible_sets().len(), 2);
    }

    #[test]
    fn test_actions_notify_exactly_once() {
        let mut session = session();
        let calls = Rc::new(Cell::new(0));
        let observed = Rc::clone(&calls);
        let subscription = session.on_change(move || observed.set(observed.get() + 1));

        let id = session.create_set();
        assert_eq!(calls.get(), 1);
        session.rename_set(&id, "Vanguard");
        assert_eq!(calls.get(), 2);
        session.set_search_query("horse");
        assert_eq!(calls.get(), 3);

        // Actions on unknown ids are no-ops and stay silent
        session.rename_set("missing", "x");
        assert_eq!(calls.get(), 3);

        session.unsubscribe(subscription);
        session.create_set();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_state_persists_across_sessions() {
        let storage = MockStorageProvider::default();
        let mut session = DraftSession::new(PointSetStore::new(storage.clone()));
        let id = session.create_set_with_total(80.0);
        session.rename_set(&id, "Cavalry");
        session.set_cost(&id, "knight", "3");

        let restored = DraftSession::new(PointSetStore::new(storage));
        assert_eq!(restored.point_sets().len(), 1);
        let set = &restored.point_sets()[0];
        assert_eq!(set.id, id);
        assert_eq!(set.name, "Cavalry");
        assert_eq!(set.total_points, 80.0);
        assert_eq!(set.cost("knight"), 3.0);
        // Restored sessions select the first set
        assert_eq!(restored.selected_set_id(), Some(id.as_str()));
    }

    #[test]
    fn test_every_action_writes_through() {
        let storage = MockStorageProvider::default();
        let mut session = DraftSession::new(PointSetStore::new(storage.clone()));
        session.create_set();

        let saved = storage.load(storage_keys::POINT_SETS).expect("saved");
        assert!(saved.contains("New point set"));
    }

    #[test]
    fn test_select_piece_and_filters() {
        let mut session = session();
        session.select_piece("war-horse");
        assert_eq!(session.selected_piece_id(), Some("war-horse"));

        session.set_filters(
            ["noble".to_string()].into(),
            ["knight".to_string()].into(),
        );
        assert!(session.filters().ranks.contains("noble"));
        assert!(session.filters().bases.contains("knight"));
    }
}
