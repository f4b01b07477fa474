// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated host for running `understory_carousel` without a real UI toolkit.
//!
//! [`SimulatedHost`] lays slides out back to back, applies every scroll
//! instantly, and plays the part of the visibility observer: [`pump`] computes
//! each observed slide's intersection ratio and delivers the ones that crossed
//! a threshold since the last delivery.

use std::collections::BTreeMap;

use kurbo::{Rect, Size, Vec2};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use understory_carousel::{
    ContainerMetrics, IntersectionEntry, Listeners, NavigationControls, Orientation,
    ScrollRequest, SlideChange, SliderEngine, SliderHost,
};

/// Installs a `fmt` subscriber, honoring `RUST_LOG` and defaulting to the carousel's debug logs.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("understory_carousel=debug,understory_carousel_demos=debug")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A host whose slides are laid out back to back along one axis.
#[derive(Debug)]
pub struct SimulatedHost {
    orientation: Orientation,
    viewport: Rect,
    extents: Vec<f64>,
    scroll: f64,
    thresholds: Vec<f64>,
    observed: BTreeMap<usize, Option<usize>>,
    listeners: Listeners,
    controls: NavigationControls,
    scrollable: bool,
    last_change: Option<SlideChange>,
}

impl SimulatedHost {
    /// A host with a viewport of `viewport_extent` and one slide per entry of `extents`.
    pub fn new(orientation: Orientation, viewport_extent: f64, extents: Vec<f64>) -> Self {
        let viewport = match orientation {
            Orientation::Horizontal => Rect::new(0.0, 0.0, viewport_extent, 200.0),
            Orientation::Vertical => Rect::new(0.0, 0.0, 200.0, viewport_extent),
        };
        Self {
            orientation,
            viewport,
            extents,
            scroll: 0.0,
            thresholds: Vec::new(),
            observed: BTreeMap::new(),
            listeners: Listeners::empty(),
            controls: NavigationControls::default(),
            scrollable: false,
            last_change: None,
        }
    }

    /// Appends a slide and returns its handle.
    pub fn push_slide(&mut self, extent: f64) -> usize {
        self.extents.push(extent);
        self.extents.len() - 1
    }

    /// Inserts a slide at the front. Existing content shifts toward the end
    /// while the scroll offset stays put.
    pub fn prepend_slide(&mut self, extent: f64) {
        self.extents.insert(0, extent);
    }

    /// Number of laid out slides.
    pub fn slide_count(&self) -> usize {
        self.extents.len()
    }

    /// Current scroll offset along the active axis.
    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Listeners currently registered by the engine.
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// The last control state pushed by the engine.
    pub fn controls(&self) -> NavigationControls {
        self.controls
    }

    /// Whether the engine considers the content scrollable.
    pub fn scrollable(&self) -> bool {
        self.scrollable
    }

    /// The snapshot from the most recent observation batch.
    pub fn last_change(&self) -> Option<SlideChange> {
        self.last_change
    }

    fn content_extent(&self) -> f64 {
        self.extents.iter().sum()
    }

    fn viewport_extent(&self) -> f64 {
        self.orientation.axis().extent(self.viewport)
    }

    fn slide_start(&self, slide: usize) -> f64 {
        self.extents[..slide].iter().sum()
    }

    fn ratio(&self, slide: usize) -> f64 {
        let extent = self.extents[slide];
        if extent <= 0.0 {
            return 0.0;
        }
        let start = self.slide_start(slide);
        let visible_start = start.max(self.scroll);
        let visible_end = (start + extent).min(self.scroll + self.viewport_extent());
        ((visible_end - visible_start) / extent).clamp(0.0, 1.0)
    }

    fn bucket(&self, ratio: f64) -> usize {
        if ratio <= 0.0 {
            return 0;
        }
        self.thresholds.iter().filter(|t| ratio >= **t).count()
    }

    /// Ratios of the observed slides whose threshold bucket changed since the last call.
    pub fn take_batch(&mut self) -> Vec<(usize, f64)> {
        let mut batch = Vec::new();
        let slides: Vec<usize> = self.observed.keys().copied().collect();
        for slide in slides {
            if slide >= self.extents.len() {
                continue;
            }
            let ratio = self.ratio(slide);
            let bucket = Some(self.bucket(ratio));
            if self.observed.insert(slide, bucket) != Some(bucket) {
                batch.push((slide, ratio));
            }
        }
        batch
    }
}

impl SliderHost for SimulatedHost {
    type Slide = usize;

    fn container(&self) -> Option<ContainerMetrics> {
        let axis = self.orientation.axis();
        let content_size = match self.orientation {
            Orientation::Horizontal => Size::new(self.content_extent(), self.viewport.height()),
            Orientation::Vertical => Size::new(self.viewport.width(), self.content_extent()),
        };
        Some(ContainerMetrics {
            bounds: self.viewport,
            content_size,
            scroll_offset: axis.vector(self.scroll),
        })
    }

    fn slide_bounds(&self, slide: &usize) -> Option<Rect> {
        let extent = *self.extents.get(*slide)?;
        let start = self.slide_start(*slide);
        let axis = self.orientation.axis();
        let origin = self.viewport.origin() + axis.vector(start);
        let size = match self.orientation {
            Orientation::Horizontal => Size::new(extent, self.viewport.height()),
            Orientation::Vertical => Size::new(self.viewport.width(), extent),
        };
        Some(Rect::from_origin_size(origin, size))
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        let max = (self.content_extent() - self.viewport_extent()).max(0.0);
        self.scroll = self
            .orientation
            .axis()
            .component(request.offset)
            .clamp(0.0, max);
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        let max = (self.content_extent() - self.viewport_extent()).max(0.0);
        self.scroll = self.orientation.axis().component(offset).clamp(0.0, max);
    }

    fn observe(&mut self, slide: &usize, thresholds: &[f64]) {
        self.thresholds = thresholds.to_vec();
        // A fresh subscription always reports the current state first.
        self.observed.insert(*slide, None);
    }

    fn disconnect_observer(&mut self) {
        self.observed.clear();
    }

    fn add_listeners(&mut self, listeners: Listeners) {
        self.listeners |= listeners;
    }

    fn remove_listeners(&mut self, listeners: Listeners) {
        self.listeners -= listeners;
    }

    fn update_controls(&mut self, controls: NavigationControls) {
        self.controls = controls;
    }

    fn set_scrollable(&mut self, scrollable: bool) {
        self.scrollable = scrollable;
    }

    fn on_slide(&mut self, change: SlideChange) {
        self.last_change = Some(change);
    }
}

/// Delivers pending visibility changes to the engine, as an observer callback would.
///
/// Returns `true` if a batch was delivered.
pub fn pump(engine: &mut SliderEngine<SimulatedHost>) -> bool {
    let batch = engine.host_mut().take_batch();
    if batch.is_empty() {
        return false;
    }
    debug!(
        entries = batch.len(),
        scroll = engine.host().scroll(),
        "delivering observation batch"
    );
    engine.on_intersections(
        batch
            .iter()
            .map(|(slide, ratio)| IntersectionEntry::new(slide, *ratio)),
    );
    true
}

/// Formats the visible range of `engine` for printing.
pub fn describe(engine: &SliderEngine<SimulatedHost>) -> String {
    let controls = engine.controls();
    format!(
        "scroll {:>7.1} | visible {:?}..={:?} | prev {} | next {}",
        engine.host().scroll(),
        engine.first_fully_visible_slide_index(),
        engine.last_fully_visible_slide_index(),
        if controls.previous_enabled { "on " } else { "off" },
        if controls.next_enabled { "on " } else { "off" },
    )
}
