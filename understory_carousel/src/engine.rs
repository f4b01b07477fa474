// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider engine: slide registry, visibility tracking, navigation and dragging.

use alloc::vec::Vec;

use kurbo::Point;
use tracing::{debug, trace};

use crate::drag::{ClickDisposition, DragState, PointerButton};
use crate::{
    Axis, IntersectionEntry, Listeners, NavigationControls, NavigationDirection,
    OBSERVATION_THRESHOLDS, ScrollBehavior, ScrollRequest, SlideChange, SliderConfig,
    SliderHost, Visibility, VisibleIndexSet, scroll_offset_for,
};

/// Orchestrates slide visibility tracking and navigation for one slider instance.
///
/// The engine owns its [`SliderHost`] and reacts to calls the host routes to it:
/// slide mounts/unmounts, observation batches, pointer events, and resizes.
/// Everything runs synchronously on the caller's thread; no call blocks or
/// waits for a scroll to finish.
///
/// Resources acquired in [`activate`](Self::activate) are released by
/// [`deactivate`](Self::deactivate), which also runs when an active engine is dropped.
#[derive(Debug)]
pub struct SliderEngine<H: SliderHost> {
    host: H,
    config: SliderConfig,
    slides: Vec<Option<H::Slide>>,
    visible: VisibleIndexSet,
    drag: DragState,
    controls: NavigationControls,
    scrollable: bool,
    listeners: Listeners,
    active: bool,
    initial_slide_applied: bool,
}

impl<H: SliderHost> SliderEngine<H> {
    /// Creates an inactive engine with no slides.
    pub fn new(host: H, config: SliderConfig) -> Self {
        Self {
            host,
            drag: DragState::with_threshold(config.click_block_threshold),
            config,
            slides: Vec::new(),
            visible: VisibleIndexSet::new(),
            controls: NavigationControls::default(),
            scrollable: false,
            listeners: Listeners::empty(),
            active: false,
            initial_slide_applied: false,
        }
    }

    /// Shared access to the host, for example to reach the scroll container.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Geometry projection for the configured orientation.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.config.orientation.axis()
    }

    /// Returns `true` between [`activate`](Self::activate) and [`deactivate`](Self::deactivate).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sets up listeners and the visibility subscription.
    ///
    /// On the first activation a non-zero
    /// [`initial_slide_index`](SliderConfig::initial_slide_index) is aligned with
    /// the leading edge without animation.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        debug!(
            slides = self.slides.len(),
            orientation = %self.config.orientation,
            "activating slider"
        );
        self.active = true;
        self.add_listeners(Listeners::CONTAINER);
        self.subscribe();

        self.scrollable = self.measure_scrollable();
        self.host.set_scrollable(self.scrollable);

        if !self.initial_slide_applied {
            self.initial_slide_applied = true;
            let index = self.config.initial_slide_index;
            if index != 0 {
                self.align_slide(index, NavigationDirection::Next, ScrollBehavior::Instant);
            }
        }
    }

    /// Disconnects the visibility subscription and removes every listener.
    ///
    /// Idempotent. An in-flight drag is abandoned.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        debug!("deactivating slider");
        self.host.disconnect_observer();
        if !self.listeners.is_empty() {
            self.host.remove_listeners(self.listeners);
            self.listeners = Listeners::empty();
        }
        self.drag.reset();
        self.active = false;
    }

    /// Replaces the configuration, tearing down and re-establishing the
    /// subscription if the engine is active.
    ///
    /// The initial-slide scroll is not repeated.
    pub fn reconfigure(&mut self, config: SliderConfig) {
        debug!(?config, "reconfiguring slider");
        let was_active = self.active;
        self.deactivate();
        self.drag.click_block_threshold = config.click_block_threshold;
        self.config = config;
        if was_active {
            self.activate();
        }
    }

    /// Registers `slide` at `index`, replacing any slide already there.
    pub fn mount_slide(&mut self, index: usize, slide: H::Slide) {
        if index >= self.slides.len() {
            self.slides.resize_with(index + 1, || None);
        }
        self.slides[index] = Some(slide);
        if self.active {
            self.resubscribe();
        }
    }

    /// Removes the slide at `index`, purging it from the visible sets.
    ///
    /// The slot stays declared; only [`set_slide_count`](Self::set_slide_count)
    /// shrinks the registry.
    pub fn unmount_slide(&mut self, index: usize) -> Option<H::Slide> {
        let slide = self.slides.get_mut(index)?.take();
        self.visible.remove(index);
        self.visible.normalize();
        if self.active {
            self.resubscribe();
        }
        self.recompute_controls();
        slide
    }

    /// Resizes the registry to `len` slots, dropping slides at or beyond `len`.
    ///
    /// Hosts that recycle data call this whenever their slide count changes.
    pub fn set_slide_count(&mut self, len: usize) {
        self.slides.resize_with(len, || None);
        self.visible.truncate(len);
        self.visible.normalize();
        if self.active {
            self.resubscribe();
        }
        self.recompute_controls();
    }

    /// Number of slots in the slide registry.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// The slide registered at `index`.
    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&H::Slide> {
        self.slides.get(index)?.as_ref()
    }

    /// Applies one observation batch.
    ///
    /// Every entry is classified and applied before the visible sets are
    /// normalized and the controls recomputed, so observers never see a
    /// partially applied batch. Entries whose target is not registered are
    /// ignored. [`SliderHost::on_slide`] is invoked once at the end.
    pub fn on_intersections<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = IntersectionEntry<'a, H::Slide>>,
        H::Slide: 'a,
    {
        for entry in entries {
            let Some(index) = self.index_of(entry.target) else {
                trace!(ratio = entry.ratio, "ignoring intersection for unregistered slide");
                continue;
            };
            self.visible.apply(index, Visibility::from_ratio(entry.ratio));
        }
        self.visible.normalize();
        trace!(
            fully = ?self.visible.fully_visible(),
            partially = ?self.visible.partially_visible(),
            "applied intersection batch"
        );
        self.recompute_controls();
        self.host.on_slide(SlideChange {
            first_visible: self.visible.first_visible_index(),
            last_visible: self.visible.last_visible_index(),
            controls: self.controls,
            slide_count: self.slides.len(),
        });
    }

    /// Re-checks scrollability and the controls after the viewport changed size.
    pub fn resize(&mut self) {
        self.recompute_controls();
    }

    /// Scrolls so that slide `index` comes into view.
    ///
    /// Slides at or after the first visible one are aligned with the leading
    /// edge, earlier slides with the trailing edge. Returns `false` without
    /// scrolling if the container or the slide is not mounted.
    pub fn scroll_to_slide(&mut self, index: usize, behavior: ScrollBehavior) -> bool {
        let direction = NavigationDirection::toward(index, self.visible.first_visible_index());
        self.align_slide(index, direction, behavior)
    }

    /// Scrolls slide `index` to the edge chosen by `direction`, regardless of
    /// which slides are visible.
    pub fn align_slide(
        &mut self,
        index: usize,
        direction: NavigationDirection,
        behavior: ScrollBehavior,
    ) -> bool {
        let Some(container) = self.host.container() else {
            trace!(index, "container not mounted; not scrolling");
            return false;
        };
        let Some(bounds) = self.slide(index).and_then(|s| self.host.slide_bounds(s)) else {
            trace!(index, "no such slide; not scrolling");
            return false;
        };
        let axis = self.axis();
        let offset = scroll_offset_for(
            direction,
            axis.start(bounds),
            axis.start(container.bounds),
            axis.extent(container.bounds),
            axis.extent(bounds),
        );
        debug!(index, ?direction, offset, %behavior, "scrolling to slide");
        self.host.scroll_to(ScrollRequest {
            offset: axis.vector(offset),
            behavior,
        });
        true
    }

    /// Smoothly scrolls to the slide after the last visible one.
    ///
    /// With nothing visible this targets the first slide.
    pub fn scroll_to_next_slide(&mut self) -> bool {
        let target = self.visible.last_visible_index().map_or(0, |last| last + 1);
        self.scroll_to_slide(target, ScrollBehavior::Smooth)
    }

    /// Smoothly scrolls to the slide before the first visible one.
    pub fn scroll_to_previous_slide(&mut self) -> bool {
        let Some(target) = self
            .visible
            .first_visible_index()
            .and_then(|first| first.checked_sub(1))
        else {
            trace!("no slide before the first visible one");
            return false;
        };
        self.scroll_to_slide(target, ScrollBehavior::Smooth)
    }

    /// First fully visible slide, falling back to the first partially visible one.
    #[must_use]
    pub fn first_fully_visible_slide_index(&self) -> Option<usize> {
        self.visible.first_visible_index()
    }

    /// Last fully visible slide, falling back to the last partially visible one.
    #[must_use]
    pub fn last_fully_visible_slide_index(&self) -> Option<usize> {
        self.visible.last_visible_index()
    }

    /// The tracked visible indices.
    #[must_use]
    pub fn visible_indices(&self) -> &VisibleIndexSet {
        &self.visible
    }

    /// The most recently computed navigation controls.
    #[must_use]
    pub fn controls(&self) -> NavigationControls {
        self.controls
    }

    /// Whether the previous/next buttons should be rendered at all.
    #[must_use]
    pub fn show_navigation_buttons(&self) -> bool {
        !self.config.hide_navigation_buttons
    }

    /// Whether the content overflows the viewport along the active axis, as last measured.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    /// The drag gesture state.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Handles a button press on the scroll container.
    pub fn pointer_down(&mut self, button: PointerButton, position: Point) {
        if !self.active {
            return;
        }
        let Some(container) = self.host.container() else {
            return;
        };
        let axis = self.axis();
        let started = self.drag.on_down(
            button,
            axis.coordinate(position),
            axis.component(container.scroll_offset),
        );
        if started {
            debug!(anchor = ?self.drag.anchor(), "drag started");
            self.add_listeners(Listeners::DOCUMENT_POINTER_UP);
        }
    }

    /// Handles pointer movement over the scroll container.
    pub fn pointer_move(&mut self, position: Point) {
        let axis = self.axis();
        let Some(offset) = self.drag.on_move(axis.coordinate(position)) else {
            return;
        };
        let current = self
            .host
            .container()
            .map(|c| c.scroll_offset)
            .unwrap_or_default();
        self.host.set_scroll_offset(axis.with_component(current, offset));
    }

    /// Handles a button release anywhere in the document.
    pub fn pointer_up(&mut self) {
        if self.drag.on_up() {
            debug!(
                blocking_next_click = self.drag.is_blocking_next_click(),
                "drag ended"
            );
            self.remove_listeners(Listeners::DOCUMENT_POINTER_UP);
        }
    }

    /// Handles a capture-phase click on the scroll container.
    ///
    /// When this returns [`ClickDisposition::Suppress`] the host must stop the
    /// click from reaching the child.
    pub fn click(&mut self) -> ClickDisposition {
        let disposition = self.drag.on_click();
        if disposition == ClickDisposition::Suppress {
            trace!("suppressing click after drag");
        }
        disposition
    }

    fn index_of(&self, target: &H::Slide) -> Option<usize> {
        self.slides
            .iter()
            .position(|slot| slot.as_ref() == Some(target))
    }

    fn subscribe(&mut self) {
        for slide in self.slides.iter().flatten() {
            self.host.observe(slide, &OBSERVATION_THRESHOLDS);
        }
    }

    fn resubscribe(&mut self) {
        self.host.disconnect_observer();
        self.subscribe();
    }

    fn add_listeners(&mut self, listeners: Listeners) {
        let missing = listeners.difference(self.listeners);
        if !missing.is_empty() {
            self.host.add_listeners(missing);
            self.listeners |= missing;
        }
    }

    fn remove_listeners(&mut self, listeners: Listeners) {
        let present = listeners.intersection(self.listeners);
        if !present.is_empty() {
            self.host.remove_listeners(present);
            self.listeners -= present;
        }
    }

    fn measure_scrollable(&self) -> bool {
        let axis = self.axis();
        self.host.container().is_some_and(|container| {
            axis.extent_of(container.content_size) > axis.extent(container.bounds)
        })
    }

    fn recompute_controls(&mut self) {
        let scrollable = self.measure_scrollable();
        if scrollable != self.scrollable {
            self.scrollable = scrollable;
            self.host.set_scrollable(scrollable);
        }

        let first = self.visible.first_visible_index();
        let last = self.visible.last_visible_index();
        // `None` behaves as index -1 here.
        let after_last = last.map_or(0, |last| last + 1);
        self.controls = NavigationControls {
            previous_enabled: scrollable && first.is_some_and(|first| first > 0),
            next_enabled: scrollable && after_last != self.slides.len(),
        };
        if self.show_navigation_buttons() {
            self.host.update_controls(self.controls);
        }
    }
}

impl<H: SliderHost> Drop for SliderEngine<H> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::{Point, Rect, Size, Vec2};

    use super::SliderEngine;
    use crate::drag::{ClickDisposition, PointerButton};
    use crate::{
        ContainerMetrics, IntersectionEntry, Listeners, NavigationControls, Orientation,
        ScrollBehavior, ScrollRequest, SlideChange, SliderConfig, SliderHost,
    };

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Observe(u32),
        Disconnect,
        Add(Listeners),
        Remove(Listeners),
    }

    #[derive(Debug, Default)]
    struct TestHost {
        container: Option<ContainerMetrics>,
        bounds: BTreeMap<u32, Rect>,
        scrolls: Vec<ScrollRequest>,
        assigned: Vec<Vec2>,
        controls: Vec<NavigationControls>,
        scrollable: Option<bool>,
        changes: Vec<SlideChange>,
        thresholds: Vec<f64>,
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl TestHost {
        /// A horizontal container at the origin with the given client and scroll widths.
        fn horizontal(client_width: f64, scroll_width: f64) -> Self {
            Self {
                container: Some(ContainerMetrics {
                    bounds: Rect::new(0.0, 0.0, client_width, 300.0),
                    content_size: Size::new(scroll_width, 300.0),
                    scroll_offset: Vec2::ZERO,
                }),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl SliderHost for TestHost {
        type Slide = u32;

        fn container(&self) -> Option<ContainerMetrics> {
            self.container
        }

        fn slide_bounds(&self, slide: &u32) -> Option<Rect> {
            self.bounds.get(slide).copied()
        }

        fn scroll_to(&mut self, request: ScrollRequest) {
            self.scrolls.push(request);
        }

        fn set_scroll_offset(&mut self, offset: Vec2) {
            self.assigned.push(offset);
            if let Some(container) = &mut self.container {
                container.scroll_offset = offset;
            }
        }

        fn observe(&mut self, slide: &u32, thresholds: &[f64]) {
            self.thresholds = thresholds.to_vec();
            self.calls.borrow_mut().push(Call::Observe(*slide));
        }

        fn disconnect_observer(&mut self) {
            self.calls.borrow_mut().push(Call::Disconnect);
        }

        fn add_listeners(&mut self, listeners: Listeners) {
            self.calls.borrow_mut().push(Call::Add(listeners));
        }

        fn remove_listeners(&mut self, listeners: Listeners) {
            self.calls.borrow_mut().push(Call::Remove(listeners));
        }

        fn update_controls(&mut self, controls: NavigationControls) {
            self.controls.push(controls);
        }

        fn set_scrollable(&mut self, scrollable: bool) {
            self.scrollable = Some(scrollable);
        }

        fn on_slide(&mut self, change: SlideChange) {
            self.changes.push(change);
        }
    }

    /// Four slides with ids 1..=4; slide `i` sits at `100 * (i + 1)` and is as wide.
    fn four_slides(mut host: TestHost, config: SliderConfig) -> SliderEngine<TestHost> {
        for i in 0..4_u32 {
            let edge = 100.0 * f64::from(i + 1);
            host.bounds
                .insert(i + 1, Rect::new(edge, 0.0, 2.0 * edge, 100.0));
        }
        let mut engine = SliderEngine::new(host, config);
        for i in 0..4_u32 {
            engine.mount_slide(i as usize, i + 1);
        }
        engine.activate();
        engine
    }

    fn report(engine: &mut SliderEngine<TestHost>, ratios: [f64; 4]) {
        let ids = [1_u32, 2, 3, 4];
        engine.on_intersections(
            ids.iter()
                .zip(ratios)
                .map(|(id, ratio)| IntersectionEntry::new(id, ratio)),
        );
    }

    #[test]
    fn activation_observes_every_slide() {
        let engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        let calls = engine.host().calls();
        assert_eq!(
            calls,
            vec![
                Call::Add(Listeners::CONTAINER),
                Call::Observe(1),
                Call::Observe(2),
                Call::Observe(3),
                Call::Observe(4),
            ]
        );
        assert_eq!(engine.host().thresholds, vec![0.0, 0.5, 0.9]);
    }

    #[test]
    fn mounting_while_active_resubscribes() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        engine.host().calls.borrow_mut().clear();

        engine.mount_slide(4, 5);
        assert_eq!(
            engine.host().calls(),
            vec![
                Call::Disconnect,
                Call::Observe(1),
                Call::Observe(2),
                Call::Observe(3),
                Call::Observe(4),
                Call::Observe(5),
            ]
        );
        assert_eq!(engine.slide_count(), 5);
    }

    #[test]
    fn scrollable_when_content_exceeds_viewport() {
        let engine = four_slides(TestHost::horizontal(500.0, 1000.0), SliderConfig::default());
        assert!(engine.is_scrollable());
        assert_eq!(engine.host().scrollable, Some(true));

        let engine = four_slides(TestHost::horizontal(500.0, 400.0), SliderConfig::default());
        assert!(!engine.is_scrollable());
        assert_eq!(engine.host().scrollable, Some(false));
    }

    #[test]
    fn controls_start_disabled() {
        let engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        assert_eq!(engine.controls(), NavigationControls::default());
        assert!(engine.host().controls.is_empty());
    }

    #[test]
    fn next_aligns_following_slide_with_leading_edge() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        report(&mut engine, [1.0, 0.5, 0.0, 0.0]);

        assert!(engine.scroll_to_next_slide());
        assert_eq!(
            engine.host().scrolls,
            vec![ScrollRequest {
                offset: Vec2::new(200.0, 0.0),
                behavior: ScrollBehavior::Smooth,
            }]
        );
    }

    #[test]
    fn previous_aligns_preceding_slide_with_trailing_edge() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        report(&mut engine, [0.0, 0.0, 1.0, 0.5]);

        assert!(engine.scroll_to_previous_slide());
        assert_eq!(
            engine.host().scrolls,
            vec![ScrollRequest {
                offset: Vec2::new(-600.0, 0.0),
                behavior: ScrollBehavior::Smooth,
            }]
        );
    }

    #[test]
    fn controls_follow_visibility() {
        let mut engine = four_slides(TestHost::horizontal(500.0, 1000.0), SliderConfig::default());

        let cases = [
            // All slides are visible.
            ([1.0, 1.0, 1.0, 1.0], false, false),
            // Only the first slide is not visible.
            ([0.0, 1.0, 1.0, 1.0], true, false),
            // Only the last slide is not visible.
            ([1.0, 1.0, 1.0, 0.0], false, true),
            // Only a single slide is partially visible.
            ([0.0, 0.0, 0.5, 0.0], true, true),
        ];
        for (ratios, previous_enabled, next_enabled) in cases {
            report(&mut engine, ratios);
            let expected = NavigationControls {
                previous_enabled,
                next_enabled,
            };
            assert_eq!(engine.controls(), expected, "ratios {ratios:?}");
            assert_eq!(engine.host().controls.last(), Some(&expected));
        }
    }

    #[test]
    fn controls_disabled_when_not_scrollable() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 900.0), SliderConfig::default());
        report(&mut engine, [0.0, 1.0, 1.0, 0.0]);
        assert_eq!(engine.controls(), NavigationControls::default());
    }

    #[test]
    fn resize_rechecks_scrollability() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 900.0), SliderConfig::default());
        report(&mut engine, [0.0, 1.0, 1.0, 0.0]);
        assert!(!engine.is_scrollable());

        if let Some(container) = &mut engine.host_mut().container {
            container.bounds = Rect::new(0.0, 0.0, 500.0, 300.0);
        }
        engine.resize();
        assert!(engine.is_scrollable());
        assert_eq!(engine.host().scrollable, Some(true));
        assert_eq!(
            engine.controls(),
            NavigationControls {
                previous_enabled: true,
                next_enabled: true,
            }
        );
    }

    #[test]
    fn hidden_buttons_are_not_updated() {
        let config = SliderConfig::default().with_hidden_navigation_buttons(true);
        let mut engine = four_slides(TestHost::horizontal(500.0, 1000.0), config);
        report(&mut engine, [0.0, 1.0, 1.0, 1.0]);

        assert!(!engine.show_navigation_buttons());
        assert!(engine.host().controls.is_empty());
        assert!(engine.controls().previous_enabled);
    }

    #[test]
    fn on_slide_fires_once_per_batch() {
        let mut engine = four_slides(TestHost::horizontal(500.0, 1000.0), SliderConfig::default());
        report(&mut engine, [1.0, 1.0, 0.5, 0.0]);
        report(&mut engine, [1.0, 1.0, 0.5, 0.0]);

        let changes = &engine.host().changes;
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0], changes[1]);
        assert_eq!(changes[0].controls, engine.controls());
        assert_eq!(engine.host().controls.last(), Some(&changes[0].controls));
        assert!(changes[0].controls.next_enabled);
        assert_eq!(changes[0].first_visible, Some(0));
        assert_eq!(changes[0].last_visible, Some(1));
        assert_eq!(changes[0].slide_count, 4);
    }

    #[test]
    fn unregistered_targets_are_ignored() {
        let mut engine = four_slides(TestHost::horizontal(500.0, 1000.0), SliderConfig::default());
        let stray = 99_u32;
        engine.on_intersections([IntersectionEntry::new(&stray, 1.0)]);

        assert!(engine.visible_indices().is_empty());
        assert_eq!(engine.host().changes.len(), 1);
    }

    #[test]
    fn jump_direction_depends_on_first_visible() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        report(&mut engine, [0.0, 0.0, 1.0, 0.0]);

        // Before the first visible slide: trailing edge.
        assert!(engine.scroll_to_slide(0, ScrollBehavior::Instant));
        // After it: leading edge.
        assert!(engine.scroll_to_slide(3, ScrollBehavior::Smooth));

        assert_eq!(
            engine.host().scrolls,
            vec![
                ScrollRequest {
                    offset: Vec2::new(-800.0, 0.0),
                    behavior: ScrollBehavior::Instant,
                },
                ScrollRequest {
                    offset: Vec2::new(400.0, 0.0),
                    behavior: ScrollBehavior::Smooth,
                },
            ]
        );
    }

    #[test]
    fn missing_targets_are_no_ops() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        report(&mut engine, [1.0, 1.0, 1.0, 1.0]);

        // Nothing after the last slide, nothing before the first.
        assert!(!engine.scroll_to_next_slide());
        assert!(!engine.scroll_to_previous_slide());
        assert!(!engine.scroll_to_slide(17, ScrollBehavior::Smooth));

        engine.host_mut().container = None;
        assert!(!engine.scroll_to_slide(1, ScrollBehavior::Smooth));
        assert!(engine.host().scrolls.is_empty());
    }

    #[test]
    fn next_with_nothing_visible_targets_first_slide() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        assert!(engine.scroll_to_next_slide());
        assert_eq!(engine.host().scrolls[0].offset, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn initial_slide_is_applied_once() {
        let config = SliderConfig::default().with_initial_slide_index(2);
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), config.clone());
        assert_eq!(
            engine.host().scrolls,
            vec![ScrollRequest {
                offset: Vec2::new(300.0, 0.0),
                behavior: ScrollBehavior::Instant,
            }]
        );

        engine.deactivate();
        engine.activate();
        engine.reconfigure(config);
        assert_eq!(engine.host().scrolls.len(), 1);
    }

    #[test]
    fn zero_initial_slide_does_not_scroll() {
        let engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        assert!(engine.host().scrolls.is_empty());
    }

    #[test]
    fn vertical_orientation_uses_y_axis() {
        let mut host = TestHost {
            container: Some(ContainerMetrics {
                bounds: Rect::new(0.0, 20.0, 300.0, 520.0),
                content_size: Size::new(300.0, 1600.0),
                scroll_offset: Vec2::ZERO,
            }),
            ..TestHost::default()
        };
        for i in 0..4_u32 {
            let top = 20.0 + 400.0 * f64::from(i);
            host.bounds.insert(i + 1, Rect::new(0.0, top, 300.0, top + 400.0));
        }
        let config = SliderConfig::default().with_orientation(Orientation::Vertical);
        let mut engine = SliderEngine::new(host, config);
        for i in 0..4_u32 {
            engine.mount_slide(i as usize, i + 1);
        }
        engine.activate();
        assert!(engine.is_scrollable());

        report(&mut engine, [1.0, 0.0, 0.0, 0.0]);
        assert!(engine.scroll_to_next_slide());
        assert_eq!(engine.host().scrolls[0].offset, Vec2::new(0.0, 400.0));

        engine.pointer_down(PointerButton::Primary, Point::new(50.0, 300.0));
        engine.pointer_move(Point::new(400.0, 250.0));
        assert_eq!(engine.host().assigned, vec![Vec2::new(0.0, 50.0)]);
    }

    #[test]
    fn drag_scrolls_and_suppresses_release_click() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        engine.host().calls.borrow_mut().clear();

        engine.pointer_down(PointerButton::Primary, Point::ZERO);
        assert!(engine.drag().is_dragging());
        engine.pointer_move(Point::new(100.0, 0.0));
        engine.pointer_up();

        assert_eq!(engine.host().assigned, vec![Vec2::new(-100.0, 0.0)]);
        assert_eq!(
            engine.host().calls(),
            vec![
                Call::Add(Listeners::DOCUMENT_POINTER_UP),
                Call::Remove(Listeners::DOCUMENT_POINTER_UP),
            ]
        );

        // The click produced by the release is swallowed, the next one passes.
        assert_eq!(engine.click(), ClickDisposition::Suppress);
        assert_eq!(engine.click(), ClickDisposition::Pass);
    }

    #[test]
    fn configured_threshold_reaches_drag_state() {
        let config = SliderConfig::default().with_click_block_threshold(20.0);
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), config);
        assert_eq!(engine.drag().click_block_threshold, 20.0);

        engine.pointer_down(PointerButton::Primary, Point::ZERO);
        engine.pointer_move(Point::new(15.0, 0.0));
        engine.pointer_up();
        assert_eq!(engine.click(), ClickDisposition::Pass);

        engine.reconfigure(SliderConfig::default());
        engine.pointer_down(PointerButton::Primary, Point::ZERO);
        engine.pointer_move(Point::new(15.0, 0.0));
        engine.pointer_up();
        assert_eq!(engine.click(), ClickDisposition::Suppress);
    }

    #[test]
    fn click_without_drag_passes() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        engine.pointer_down(PointerButton::Primary, Point::new(10.0, 10.0));
        engine.pointer_up();
        assert_eq!(engine.click(), ClickDisposition::Pass);
    }

    #[test]
    fn inactive_engine_ignores_presses() {
        let host = TestHost::horizontal(1000.0, 2000.0);
        let mut engine = SliderEngine::new(host, SliderConfig::default());
        engine.pointer_down(PointerButton::Primary, Point::ZERO);
        assert!(!engine.drag().is_dragging());
        assert!(engine.host().calls().is_empty());
    }

    #[test]
    fn deactivate_releases_everything_mid_drag() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        engine.pointer_down(PointerButton::Primary, Point::ZERO);
        engine.host().calls.borrow_mut().clear();

        engine.deactivate();
        assert_eq!(
            engine.host().calls(),
            vec![Call::Disconnect, Call::Remove(Listeners::all())]
        );
        assert!(!engine.drag().is_dragging());

        // Idempotent.
        engine.deactivate();
        assert_eq!(engine.host().calls().len(), 2);
    }

    #[test]
    fn dropping_active_engine_cleans_up() {
        let engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        let calls = Rc::clone(&engine.host().calls);
        calls.borrow_mut().clear();

        drop(engine);
        assert_eq!(
            *calls.borrow(),
            vec![Call::Disconnect, Call::Remove(Listeners::CONTAINER)]
        );
    }

    #[test]
    fn reconfigure_tears_down_before_setting_up() {
        let mut engine = four_slides(TestHost::horizontal(1000.0, 2000.0), SliderConfig::default());
        engine.host().calls.borrow_mut().clear();

        engine.reconfigure(SliderConfig::default().with_orientation(Orientation::Vertical));
        let calls = engine.host().calls();
        assert_eq!(calls[..2], [Call::Disconnect, Call::Remove(Listeners::CONTAINER)]);
        assert_eq!(calls[2], Call::Add(Listeners::CONTAINER));
        assert_eq!(calls.len(), 7);
        // 300 tall content in a 300 tall viewport.
        assert!(!engine.is_scrollable());
    }

    #[test]
    fn unmount_purges_visible_index() {
        let mut engine = four_slides(TestHost::horizontal(500.0, 1000.0), SliderConfig::default());
        report(&mut engine, [0.0, 1.0, 1.0, 1.0]);
        assert_eq!(engine.last_fully_visible_slide_index(), Some(3));

        assert_eq!(engine.unmount_slide(3), Some(4));
        assert_eq!(engine.last_fully_visible_slide_index(), Some(2));
        // The slot is still declared, so there is something after the last visible slide.
        assert_eq!(engine.slide_count(), 4);
        assert_eq!(engine.slide(3), None);
        assert!(engine.controls().next_enabled);

        engine.set_slide_count(3);
        assert_eq!(
            engine.controls(),
            NavigationControls {
                previous_enabled: true,
                next_enabled: false,
            }
        );
    }

    #[test]
    fn unmount_keeps_declared_slide_count() {
        let mut engine = four_slides(TestHost::horizontal(500.0, 1000.0), SliderConfig::default());
        engine.set_slide_count(6);
        report(&mut engine, [1.0, 1.0, 1.0, 1.0]);
        assert!(engine.controls().next_enabled);

        engine.unmount_slide(3);
        assert_eq!(engine.slide_count(), 6);
        assert_eq!(
            engine.controls(),
            NavigationControls {
                previous_enabled: false,
                next_enabled: true,
            }
        );
    }

    #[test]
    fn shrinking_slide_count_rederives_controls() {
        let mut engine = four_slides(TestHost::horizontal(500.0, 1000.0), SliderConfig::default());
        report(&mut engine, [1.0, 1.0, 0.0, 0.0]);
        assert!(engine.controls().next_enabled);

        engine.set_slide_count(2);
        assert!(!engine.controls().next_enabled);

        engine.set_slide_count(6);
        assert_eq!(engine.slide_count(), 6);
        assert!(engine.controls().next_enabled);
        assert_eq!(engine.slide(5), None);
    }
}
