// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-scroll state machine with click suppression.
//!
//! Pressing the primary button inside the scroll container anchors a drag at the
//! current pointer coordinate and scroll offset along the active axis. Each
//! subsequent move yields the scroll offset that keeps the content under the
//! pointer. Once the pointer has travelled further than the click-block
//! threshold from the anchor, the next click is suppressed so that releasing
//! a drag over a child (for example a link) does not also activate it.
//!
//! ```
//! use understory_carousel::drag::{ClickDisposition, DragState, PointerButton};
//!
//! let mut drag = DragState::new();
//!
//! // Press at x = 300 while the container is scrolled to 0.
//! assert!(drag.on_down(PointerButton::Primary, 300.0, 0.0));
//!
//! // Dragging 120 units to the left scrolls 120 units forward.
//! assert_eq!(drag.on_move(180.0), Some(120.0));
//! assert!(drag.on_up());
//!
//! // The click fired by the release is swallowed, later clicks pass.
//! assert_eq!(drag.on_click(), ClickDisposition::Suppress);
//! assert_eq!(drag.on_click(), ClickDisposition::Pass);
//! ```

/// Pointer travel, in scroll units, beyond which a drag blocks the next click.
pub const DEFAULT_CLICK_BLOCK_THRESHOLD: f64 = 5.0;

/// Mouse button that initiated a press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the wheel button.
    Auxiliary,
    /// Any other button, by platform index.
    Other(u8),
}

/// Where a drag started, projected onto the active axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragAnchor {
    /// Pointer coordinate at press time.
    pub pointer: f64,
    /// Scroll offset of the container at press time.
    pub scroll_offset: f64,
}

/// What to do with a click reaching the scroll container in the capture phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickDisposition {
    /// Let the click continue to the child.
    Pass,
    /// Stop the click before it reaches the child.
    Suppress,
}

/// Drag gesture state: idle, or dragging from an anchor.
#[derive(Clone, Debug)]
pub struct DragState {
    anchor: Option<DragAnchor>,
    blocking_next_click: bool,
    /// Pointer travel beyond which the next click is blocked.
    pub click_block_threshold: f64,
}

impl DragState {
    /// Creates an idle state using [`DEFAULT_CLICK_BLOCK_THRESHOLD`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_CLICK_BLOCK_THRESHOLD)
    }

    /// Creates an idle state with a custom click-block threshold.
    #[must_use]
    pub fn with_threshold(click_block_threshold: f64) -> Self {
        Self {
            anchor: None,
            blocking_next_click: false,
            click_block_threshold,
        }
    }

    /// Returns `true` if pointer travel `delta` is large enough to block the next click.
    #[must_use]
    pub fn should_block_click(&self, delta: f64) -> bool {
        delta.abs() > self.click_block_threshold
    }

    /// Handles a button press inside the scroll container.
    ///
    /// Only the primary button starts a drag. A new press starts a fresh
    /// gesture, discarding a click block that was never consumed.
    ///
    /// Returns `true` if a drag started.
    pub fn on_down(&mut self, button: PointerButton, pointer: f64, scroll_offset: f64) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        self.anchor = Some(DragAnchor {
            pointer,
            scroll_offset,
        });
        self.blocking_next_click = false;
        true
    }

    /// Handles pointer movement.
    ///
    /// Returns the scroll offset the container should jump to, or `None` when idle.
    pub fn on_move(&mut self, pointer: f64) -> Option<f64> {
        let anchor = self.anchor?;
        let delta = anchor.pointer - pointer;
        if !self.blocking_next_click && self.should_block_click(delta) {
            self.blocking_next_click = true;
        }
        Some(anchor.scroll_offset + delta)
    }

    /// Handles a button release anywhere in the document.
    ///
    /// Returns `true` if a drag was in progress.
    pub fn on_up(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    /// Handles a click in the capture phase, consuming a pending click block.
    pub fn on_click(&mut self) -> ClickDisposition {
        if core::mem::take(&mut self.blocking_next_click) {
            ClickDisposition::Suppress
        } else {
            ClickDisposition::Pass
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns `true` if the next click will be suppressed.
    #[must_use]
    pub fn is_blocking_next_click(&self) -> bool {
        self.blocking_next_click
    }

    /// The anchor of the drag in progress, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<DragAnchor> {
        self.anchor
    }

    /// Returns to idle and forgets any pending click block.
    pub fn reset(&mut self) {
        self.anchor = None;
        self.blocking_next_click = false;
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}
