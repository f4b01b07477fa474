// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Endless sliding by recycling data on the host side.
//!
//! The engine knows nothing about wrapping around. This host keeps a ring of
//! items and, whenever the visible range gets close to either end of the
//! rendered slides, renders more copies of the ring there and tells the engine
//! that the slide count changed.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example infinite_sliding`

use understory_carousel::{
    NavigationDirection, Orientation, ScrollBehavior, SliderConfig, SliderEngine,
};
use understory_carousel_demos::{SimulatedHost, describe, init_tracing, pump};

const RING: usize = 10;
const EXTENT: f64 = 200.0;

/// Which ring item each rendered slide shows, plus where to continue on either side.
struct Ring {
    labels: Vec<usize>,
    next_back: usize,
    next_front: usize,
}

impl Ring {
    fn new() -> Self {
        // Two laps so there is something to slide into from either side.
        Self {
            labels: (0..RING).chain(0..RING).collect(),
            next_back: 0,
            next_front: RING - 1,
        }
    }

    fn append(&mut self, engine: &mut SliderEngine<SimulatedHost>, count: usize) {
        for _ in 0..count {
            self.labels.push(self.next_back);
            self.next_back = (self.next_back + 1) % RING;
            let handle = engine.host_mut().push_slide(EXTENT);
            engine.mount_slide(handle, handle);
        }
    }

    fn prepend(&mut self, engine: &mut SliderEngine<SimulatedHost>, count: usize) {
        for _ in 0..count {
            self.labels.insert(0, self.next_front);
            self.next_front = (self.next_front + RING - 1) % RING;
            engine.host_mut().prepend_slide(EXTENT);
        }
        // Handles are positions, so only the new tail positions need registering.
        let len = engine.host().slide_count();
        engine.set_slide_count(len);
        for handle in len - count..len {
            engine.mount_slide(handle, handle);
        }
    }

    fn visible_labels(&self, engine: &SliderEngine<SimulatedHost>) -> Vec<usize> {
        match (
            engine.first_fully_visible_slide_index(),
            engine.last_fully_visible_slide_index(),
        ) {
            (Some(first), Some(last)) => self.labels[first..=last].to_vec(),
            _ => Vec::new(),
        }
    }
}

/// Grows the rendered slides when the visible range nears either end.
fn recycle(engine: &mut SliderEngine<SimulatedHost>, ring: &mut Ring) {
    let Some(change) = engine.host().last_change() else {
        return;
    };
    let (Some(first), Some(last)) = (change.first_visible, change.last_visible) else {
        return;
    };
    let visible = (last - first).max(1);
    if last + visible >= change.slide_count {
        ring.append(engine, visible);
        pump(engine);
    } else if first <= visible {
        ring.prepend(engine, visible);
        // Keep the same item at the leading edge after the content shifted.
        engine.align_slide(
            first + visible,
            NavigationDirection::Next,
            ScrollBehavior::Instant,
        );
        pump(engine);
    }
}

fn main() {
    init_tracing();

    let mut ring = Ring::new();
    let extents = vec![EXTENT; ring.labels.len()];
    let host = SimulatedHost::new(Orientation::Horizontal, 1000.0, extents);
    let config = SliderConfig::default()
        .with_hidden_navigation_buttons(true)
        .with_initial_slide_index(RING);
    let mut engine = SliderEngine::new(host, config);
    for index in 0..ring.labels.len() {
        engine.mount_slide(index, index);
    }
    engine.activate();
    pump(&mut engine);

    for _ in 0..15 {
        engine.scroll_to_next_slide();
        pump(&mut engine);
        recycle(&mut engine, &mut ring);
        println!("{} | items {:?}", describe(&engine), ring.visible_labels(&engine));
    }
    for _ in 0..30 {
        engine.scroll_to_previous_slide();
        pump(&mut engine);
        recycle(&mut engine, &mut ring);
        println!("{} | items {:?}", describe(&engine), ring.visible_labels(&engine));
    }
    println!("rendered slides: {}", engine.slide_count());
}
