// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless slide visibility and navigation engine.
//!
//! This crate holds the logic behind a scrollable "slider" or carousel: a scroll
//! container with a row (or column) of slides, previous/next buttons, and
//! drag-to-scroll. It does not render anything, observe anything, or animate
//! anything itself. The host toolkit supplies those services through
//! [`SliderHost`] and forwards events to a [`SliderEngine`].
//!
//! The pieces, leaves first:
//!
//! - [`Visibility::from_ratio`] buckets an intersection ratio into full, partial, or none.
//! - [`VisibleIndexSet`] tracks fully and partially visible slide indices and derives
//!   the first and last visible slide.
//! - [`scroll_offset_for`] computes the scroll offset that aligns a slide with the
//!   leading edge (moving forward) or trailing edge (moving backward) of the viewport.
//! - [`drag::DragState`] turns pointer movement into scroll offsets and decides whether
//!   the click that ends a drag should be suppressed.
//! - [`SliderEngine`] ties them together: it owns the slide registry, applies
//!   observation batches, recomputes [`NavigationControls`], and exposes
//!   index-based navigation.
//!
//! ## Data flow
//!
//! Observation batches flow in: the host's visibility observer reports
//! intersection ratios, the engine classifies them, updates its
//! [`VisibleIndexSet`], normalizes once per batch, recomputes the controls, and
//! calls [`SliderHost::on_slide`]. Navigation flows out: an API call resolves a
//! target slide, computes an offset along the active [`Axis`], and hands a
//! [`ScrollRequest`] to [`SliderHost::scroll_to`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use understory_carousel::{
//!     ContainerMetrics, IntersectionEntry, Listeners, ScrollBehavior, ScrollRequest,
//!     SliderConfig, SliderEngine, SliderHost,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     scrolls: Vec<ScrollRequest>,
//! }
//!
//! impl SliderHost for Host {
//!     type Slide = usize;
//!
//!     fn container(&self) -> Option<ContainerMetrics> {
//!         Some(ContainerMetrics {
//!             bounds: Rect::new(0.0, 0.0, 250.0, 100.0),
//!             content_size: Size::new(1000.0, 100.0),
//!             scroll_offset: Vec2::ZERO,
//!         })
//!     }
//!
//!     fn slide_bounds(&self, slide: &usize) -> Option<Rect> {
//!         let x = 100.0 * *slide as f64;
//!         Some(Rect::new(x, 0.0, x + 100.0, 100.0))
//!     }
//!
//!     fn scroll_to(&mut self, request: ScrollRequest) {
//!         self.scrolls.push(request);
//!     }
//!
//!     fn set_scroll_offset(&mut self, _offset: Vec2) {}
//!     fn observe(&mut self, _slide: &usize, _thresholds: &[f64]) {}
//!     fn disconnect_observer(&mut self) {}
//!     fn add_listeners(&mut self, _listeners: Listeners) {}
//!     fn remove_listeners(&mut self, _listeners: Listeners) {}
//! }
//!
//! let mut slider = SliderEngine::new(Host::default(), SliderConfig::default());
//! for index in 0..10 {
//!     slider.mount_slide(index, index);
//! }
//! slider.activate();
//!
//! // The observer reports slides 0 and 1 fully and slide 2 half visible.
//! let slides = [0, 1, 2];
//! slider.on_intersections([
//!     IntersectionEntry::new(&slides[0], 1.0),
//!     IntersectionEntry::new(&slides[1], 1.0),
//!     IntersectionEntry::new(&slides[2], 0.5),
//! ]);
//! assert_eq!(slider.first_fully_visible_slide_index(), Some(0));
//! assert_eq!(slider.last_fully_visible_slide_index(), Some(1));
//! assert!(slider.controls().next_enabled);
//!
//! // "Next" aligns slide 2 with the leading edge.
//! slider.scroll_to_next_slide();
//! assert_eq!(slider.host().scrolls[0].offset, Vec2::new(200.0, 0.0));
//! assert_eq!(slider.host().scrolls[0].behavior, ScrollBehavior::Smooth);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo` and `tracing`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`SliderConfig`], [`Orientation`] and
//!   [`ScrollBehavior`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod config;
pub mod drag;
mod engine;
mod host;
mod offset;
mod visibility;
mod visible_set;

pub use axis::{Axis, Orientation};
pub use config::{ParseError, SliderConfig};
pub use engine::SliderEngine;
pub use host::{
    ContainerMetrics, IntersectionEntry, Listeners, NavigationControls, ScrollBehavior,
    ScrollRequest, SlideChange, SliderHost,
};
pub use offset::{NavigationDirection, scroll_offset_for};
pub use visibility::{
    FULL_VISIBILITY_RATIO, OBSERVATION_THRESHOLDS, PARTIAL_VISIBILITY_RATIO, Visibility,
};
pub use visible_set::VisibleIndexSet;
