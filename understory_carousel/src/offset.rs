// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll offset arithmetic for bringing a slide into view.
//!
//! Moving forward anchors the target slide at the leading edge of the viewport.
//! Moving backward anchors it at the trailing edge, so that the slide right
//! before the previously first visible one becomes fully visible without
//! overshooting. The same formula applies to either axis; an [`Axis`](crate::Axis)
//! picks the coordinates that feed it.

/// Direction of a navigation step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavigationDirection {
    /// Toward lower indices; aligns the target with the trailing edge.
    Prev,
    /// Toward higher indices; aligns the target with the leading edge.
    Next,
}

impl NavigationDirection {
    /// Direction used when jumping straight to `target`.
    ///
    /// Anything at or after the first visible slide is approached as [`Next`](Self::Next),
    /// anything before it as [`Prev`](Self::Prev). With nothing visible every target is
    /// treated as lying ahead.
    #[must_use]
    pub fn toward(target: usize, first_visible: Option<usize>) -> Self {
        match first_visible {
            Some(first) if target < first => Self::Prev,
            _ => Self::Next,
        }
    }
}

/// Computes the scroll offset that brings a slide into view.
///
/// - `slide_offset`: leading edge of the slide relative to its offset parent.
/// - `container_offset`: leading edge of the scroll container relative to its parent.
/// - `viewport_extent`: visible extent of the scroll container.
/// - `slide_extent`: extent of the slide.
///
/// ```
/// use understory_carousel::{NavigationDirection, scroll_offset_for};
///
/// assert_eq!(scroll_offset_for(NavigationDirection::Next, 200.0, 50.0, 1250.0, 325.0), 150.0);
/// assert_eq!(scroll_offset_for(NavigationDirection::Prev, 875.0, 50.0, 1250.0, 325.0), -100.0);
/// ```
#[must_use]
pub fn scroll_offset_for(
    direction: NavigationDirection,
    slide_offset: f64,
    container_offset: f64,
    viewport_extent: f64,
    slide_extent: f64,
) -> f64 {
    match direction {
        NavigationDirection::Next => slide_offset - container_offset,
        NavigationDirection::Prev => {
            slide_offset - container_offset - viewport_extent + slide_extent
        }
    }
}
