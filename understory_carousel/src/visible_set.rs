// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping of which slide indices are currently fully or partially visible.

use smallvec::SmallVec;

use crate::Visibility;

type Indices = SmallVec<[usize; 8]>;

/// Two collections of slide indices: fully visible and partially visible.
///
/// Mutations are cheap appends and filters. Duplicates and ordering are only
/// resolved by [`VisibleIndexSet::normalize`], which callers run once after a
/// batch of updates and before reading [`first_visible_index`] or
/// [`last_visible_index`].
///
/// After normalization:
/// - each collection holds every index at most once, in ascending order,
/// - an index never appears in both collections (full supersedes partial).
///
/// [`first_visible_index`]: VisibleIndexSet::first_visible_index
/// [`last_visible_index`]: VisibleIndexSet::last_visible_index
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleIndexSet {
    fully_visible: Indices,
    partially_visible: Indices,
}

impl VisibleIndexSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `index` as fully visible.
    pub fn add_visible(&mut self, index: usize) {
        self.fully_visible.push(index);
    }

    /// Records `index` as partially visible.
    pub fn add_partial(&mut self, index: usize) {
        self.partially_visible.push(index);
    }

    /// Forgets `index` as fully visible. No-op if absent.
    pub fn remove_visible(&mut self, index: usize) {
        self.fully_visible.retain(|i| *i != index);
    }

    /// Forgets `index` as partially visible. No-op if absent.
    pub fn remove_partial(&mut self, index: usize) {
        self.partially_visible.retain(|i| *i != index);
    }

    /// Forgets `index` entirely.
    pub fn remove(&mut self, index: usize) {
        self.remove_visible(index);
        self.remove_partial(index);
    }

    /// Records the classified visibility of `index`, moving it between collections.
    pub fn apply(&mut self, index: usize, visibility: Visibility) {
        match visibility {
            Visibility::Full => {
                self.add_visible(index);
                self.remove_partial(index);
            }
            Visibility::Partial => {
                self.add_partial(index);
                self.remove_visible(index);
            }
            Visibility::None => self.remove(index),
        }
    }

    /// Drops every index at or beyond `len`.
    pub fn truncate(&mut self, len: usize) {
        self.fully_visible.retain(|i| *i < len);
        self.partially_visible.retain(|i| *i < len);
    }

    /// Deduplicates and sorts both collections.
    pub fn normalize(&mut self) {
        self.fully_visible.sort_unstable();
        self.fully_visible.dedup();
        self.partially_visible.sort_unstable();
        self.partially_visible.dedup();

        let full = &self.fully_visible;
        self.partially_visible
            .retain(|i| full.binary_search(i).is_err());
    }

    /// Fully visible indices, ascending once normalized.
    #[must_use]
    pub fn fully_visible(&self) -> &[usize] {
        &self.fully_visible
    }

    /// Partially visible indices, ascending once normalized.
    #[must_use]
    pub fn partially_visible(&self) -> &[usize] {
        &self.partially_visible
    }

    /// Returns `true` if no index is tracked as visible at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fully_visible.is_empty() && self.partially_visible.is_empty()
    }

    /// First fully visible index, falling back to the first partially visible one.
    ///
    /// `None` means no slide is currently tracked as visible.
    #[must_use]
    pub fn first_visible_index(&self) -> Option<usize> {
        self.fully_visible
            .first()
            .or_else(|| self.partially_visible.first())
            .copied()
    }

    /// Last fully visible index, falling back to the last partially visible one.
    ///
    /// `None` means no slide is currently tracked as visible.
    #[must_use]
    pub fn last_visible_index(&self) -> Option<usize> {
        self.fully_visible
            .last()
            .or_else(|| self.partially_visible.last())
            .copied()
    }
}
