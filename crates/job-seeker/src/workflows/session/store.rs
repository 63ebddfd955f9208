use tracing::debug;

use crate::workflows::search::{JobEntry, JobId, ResultSet};

/// Active result set plus the selected entry.
///
/// The selection always names an entry of the current set: replacing or
/// clearing the set clears it, and unknown identifiers are ignored.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    current: Option<ResultSet>,
    selected: Option<JobId>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_result_set(&mut self, results: ResultSet) {
        debug!(matches = results.len(), "result set replaced");
        self.current = Some(results);
        self.selected = None;
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.selected = None;
    }

    /// Select an entry of the current set. Returns `false`, leaving the
    /// selection unchanged, when the identifier is not present.
    pub fn select(&mut self, id: &JobId) -> bool {
        let present = self
            .current
            .as_ref()
            .is_some_and(|results| results.contains(id));
        if present {
            self.selected = Some(id.clone());
        }
        present
    }

    pub fn result_set(&self) -> Option<&ResultSet> {
        self.current.as_ref()
    }

    pub fn selected_id(&self) -> Option<&JobId> {
        self.selected.as_ref()
    }

    pub fn selection(&self) -> Option<&JobEntry> {
        let id = self.selected.as_ref()?;
        self.current.as_ref()?.get(id)
    }
}
