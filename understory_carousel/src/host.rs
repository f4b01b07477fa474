// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the engine and the platform that renders the slider.
//!
//! The engine never touches a DOM, widget tree or event loop directly. Hosts
//! implement [`SliderHost`] to supply geometry, execute scroll instructions,
//! manage the visibility-observation subscription and the event listeners the
//! engine asks for, and to receive derived state.

use core::fmt;
use core::str::FromStr;

use kurbo::{Rect, Size, Vec2};

use crate::ParseError;

/// How a scroll instruction should be executed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScrollBehavior {
    /// Animate toward the target offset.
    #[default]
    Smooth,
    /// Jump to the target offset.
    Instant,
}

impl ScrollBehavior {
    /// The lowercase name used by web platforms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Instant => "instant",
        }
    }
}

impl fmt::Display for ScrollBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScrollBehavior {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smooth" => Ok(Self::Smooth),
            "instant" => Ok(Self::Instant),
            _ => Err(ParseError::ScrollBehavior),
        }
    }
}

/// Instruction for the host's scroll primitive.
///
/// The engine does not wait for the scroll to finish. A newer request simply
/// replaces an older one in whatever way the host's primitive resolves them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Target scroll offset. The cross axis is always zero.
    pub offset: Vec2,
    /// How to get there.
    pub behavior: ScrollBehavior,
}

/// Geometry of the mounted scroll container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerMetrics {
    /// Offset of the container from its parent's start and its visible size
    /// (`offsetLeft`/`offsetTop` and `clientWidth`/`clientHeight` in DOM terms).
    pub bounds: Rect,
    /// Size of the scrollable content (`scrollWidth`/`scrollHeight`).
    pub content_size: Size,
    /// Current scroll offset (`scrollLeft`/`scrollTop`).
    pub scroll_offset: Vec2,
}

bitflags::bitflags! {
    /// Event listeners the engine needs the host to route to it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Button presses on the scroll container, routed to
        /// [`SliderEngine::pointer_down`](crate::SliderEngine::pointer_down).
        const POINTER_DOWN = 0b0000_0001;
        /// Pointer movement over the scroll container, routed to
        /// [`SliderEngine::pointer_move`](crate::SliderEngine::pointer_move).
        const POINTER_MOVE = 0b0000_0010;
        /// Capture-phase clicks on the scroll container, routed to
        /// [`SliderEngine::click`](crate::SliderEngine::click).
        const CLICK_CAPTURE = 0b0000_0100;
        /// Button releases anywhere in the document, routed to
        /// [`SliderEngine::pointer_up`](crate::SliderEngine::pointer_up).
        /// Only registered while a drag is in progress.
        const DOCUMENT_POINTER_UP = 0b0000_1000;
        /// Viewport resizes, routed to [`SliderEngine::resize`](crate::SliderEngine::resize).
        const VIEWPORT_RESIZE = 0b0001_0000;
    }
}

impl Listeners {
    /// Listeners registered for the whole time the engine is active.
    pub const CONTAINER: Self = Self::POINTER_DOWN
        .union(Self::POINTER_MOVE)
        .union(Self::CLICK_CAPTURE)
        .union(Self::VIEWPORT_RESIZE);
}

/// One entry of an observation batch.
#[derive(Debug)]
pub struct IntersectionEntry<'a, S> {
    /// The observed slide.
    pub target: &'a S,
    /// Fraction of the slide inside the scroll container, in `[0, 1]`.
    pub ratio: f64,
}

impl<'a, S> IntersectionEntry<'a, S> {
    /// Creates an entry.
    #[must_use]
    pub const fn new(target: &'a S, ratio: f64) -> Self {
        Self { target, ratio }
    }
}

impl<S> Clone for IntersectionEntry<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for IntersectionEntry<'_, S> {}

/// Availability of the previous/next navigation buttons.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationControls {
    /// There is a slide before the first visible one to navigate to.
    pub previous_enabled: bool,
    /// The last slide is not yet visible.
    pub next_enabled: bool,
}

/// Snapshot passed to [`SliderHost::on_slide`] after every observation batch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlideChange {
    /// First fully visible slide, falling back to the first partially visible one.
    pub first_visible: Option<usize>,
    /// Last fully visible slide, falling back to the last partially visible one.
    pub last_visible: Option<usize>,
    /// Recomputed navigation controls.
    pub controls: NavigationControls,
    /// Number of slides in the registry.
    pub slide_count: usize,
}

/// Platform services consumed by [`SliderEngine`](crate::SliderEngine).
///
/// Methods that read geometry return `None` while the corresponding element
/// is not mounted; the engine treats that as a reason to do nothing.
pub trait SliderHost {
    /// Handle to a rendered slide, used for geometry reads and observation.
    ///
    /// Observation batches are resolved back to slide indices by comparing
    /// handles with the registry.
    type Slide: PartialEq;

    /// Current geometry of the scroll container.
    fn container(&self) -> Option<ContainerMetrics>;

    /// Offset of `slide` from its offset parent and its size
    /// (`offsetLeft`/`offsetTop` and `clientWidth`/`clientHeight` in DOM terms).
    fn slide_bounds(&self, slide: &Self::Slide) -> Option<Rect>;

    /// Executes a scroll instruction. Fire and forget.
    fn scroll_to(&mut self, request: ScrollRequest);

    /// Assigns the scroll offset directly, without animation. Used while dragging.
    fn set_scroll_offset(&mut self, offset: Vec2);

    /// Starts observing `slide` relative to the scroll container, reporting at `thresholds`.
    fn observe(&mut self, slide: &Self::Slide, thresholds: &[f64]);

    /// Stops observing every slide.
    fn disconnect_observer(&mut self);

    /// Registers `listeners`.
    fn add_listeners(&mut self, listeners: Listeners);

    /// Unregisters `listeners`.
    fn remove_listeners(&mut self, listeners: Listeners);

    /// New navigation control state. Not called when the buttons are hidden.
    fn update_controls(&mut self, controls: NavigationControls) {
        let _ = controls;
    }

    /// Whether the content currently overflows the viewport along the active axis.
    fn set_scrollable(&mut self, scrollable: bool) {
        let _ = scrollable;
    }

    /// Called once per observation batch, after the controls were recomputed.
    fn on_slide(&mut self, change: SlideChange) {
        let _ = change;
    }
}
