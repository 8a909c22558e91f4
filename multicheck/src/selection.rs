//! Selection state machine.
//!
//! [`SelectionState`] owns the checked-id set and the range anchor, and
//! mutates only through [`SelectionState::apply`], a reducer over
//! [`SelectionAction`]s. It has no dependency on input plumbing, which keeps
//! the whole state machine unit-testable on its own.
//!
//! Selection uses string IDs for stability across item mutations; the ordered
//! id list passed to each operation defines range semantics.

use indexmap::IndexSet;
use log::debug;

/// A state transition for [`SelectionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Set a single item to the desired checked state.
    ToggleSingle {
        /// Target item id
        id: String,
        /// Desired checked state
        checked: bool,
    },
    /// Set the contiguous range between the anchor and `id` to the desired
    /// checked state.
    ToggleRange {
        /// Target item id (becomes the new anchor)
        id: String,
        /// Desired checked state
        checked: bool,
    },
    /// Check every item in the current order.
    CheckAll,
    /// Uncheck everything.
    Clear,
}

/// Checked-id set plus range anchor.
///
/// The checked set preserves insertion order: [`checked_items`] enumerates
/// ids in the order they were first checked. Range operations append
/// previously-unchecked ids in list order after existing entries, and
/// [`SelectionAction::CheckAll`] rebuilds the set in list order.
///
/// [`checked_items`]: SelectionState::checked_items
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Currently checked IDs, in insertion order
    checked: IndexSet<String>,
    /// Anchor for range selection: the last directly toggled id
    anchor: Option<String>,
}

impl SelectionState {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an ID is checked.
    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    /// All checked IDs, in insertion order.
    pub fn checked_items(&self) -> Vec<String> {
        self.checked.iter().cloned().collect()
    }

    /// Number of checked items.
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    /// Check if nothing is checked.
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// The anchor id for range operations, if any toggle has happened yet.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Check if at least one item is checked.
    pub fn any_checked(&self) -> bool {
        !self.checked.is_empty()
    }

    /// Check if every one of `item_count` items is checked.
    ///
    /// Vacuously true when `item_count` is zero: a select-all checkbox over
    /// an empty list renders as checked, not indeterminate.
    pub fn all_checked(&self, item_count: usize) -> bool {
        self.checked.len() == item_count
    }

    /// Apply an action against the current item order.
    ///
    /// All operations are idempotent. A toggle referencing an id absent from
    /// `order` is a complete no-op, anchor included; for ranges the same
    /// holds when the anchor has gone stale.
    pub fn apply(&mut self, order: &[String], action: SelectionAction) {
        match action {
            SelectionAction::ToggleSingle { id, checked } => {
                self.toggle_single(order, id, checked);
            }
            SelectionAction::ToggleRange { id, checked } => match self.anchor.clone() {
                // First interaction: nothing to range from yet.
                None => self.toggle_single(order, id, checked),
                Some(anchor) => {
                    let Some(range) = resolve_range(order, &anchor, &id) else {
                        debug!("range toggle skipped: {:?} or {:?} not in order", anchor, id);
                        return;
                    };
                    if checked {
                        for range_id in range {
                            self.checked.insert(range_id);
                        }
                    } else {
                        for range_id in &range {
                            self.checked.shift_remove(range_id);
                        }
                    }
                    self.anchor = Some(id);
                }
            },
            SelectionAction::CheckAll => {
                self.checked = order.iter().cloned().collect();
            }
            SelectionAction::Clear => {
                self.checked.clear();
            }
        }
    }

    /// Drop checked ids that are absent from the current order.
    ///
    /// Called whenever the item list changes, so the checked set is always a
    /// subset of the current items. The anchor is left alone: a stale anchor
    /// already makes range operations a no-op.
    pub fn retain(&mut self, order: &[String]) {
        self.checked.retain(|id| order.contains(id));
    }

    fn toggle_single(&mut self, order: &[String], id: String, checked: bool) {
        // Unknown ids never enter the checked set; the set stays a subset
        // of the current items.
        if !order.contains(&id) {
            debug!("single toggle skipped: {:?} not in order", id);
            return;
        }
        if checked {
            self.checked.insert(id.clone());
        } else {
            self.checked.shift_remove(&id);
        }
        self.anchor = Some(id);
    }
}

/// Resolve the inclusive id range between `anchor_id` and `target_id`.
///
/// Positions are first-match in `order` (ids are assumed unique). Returns
/// `None` when either endpoint is missing. Direction-agnostic: the result is
/// always in list order regardless of which endpoint comes first.
pub fn resolve_range(order: &[String], anchor_id: &str, target_id: &str) -> Option<Vec<String>> {
    let anchor_pos = order.iter().position(|id| id == anchor_id)?;
    let target_pos = order.iter().position(|id| id == target_id)?;
    let (lo, hi) = if anchor_pos <= target_pos {
        (anchor_pos, target_pos)
    } else {
        (target_pos, anchor_pos)
    };
    Some(order[lo..=hi].to_vec())
}
