// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a simulated carousel through button navigation, jumps, and a drag.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example navigation`

use kurbo::Point;
use understory_carousel::drag::{ClickDisposition, PointerButton};
use understory_carousel::{Orientation, ScrollBehavior, SliderConfig, SliderEngine};
use understory_carousel_demos::{SimulatedHost, describe, init_tracing, pump};

fn build(orientation: Orientation, config: SliderConfig) -> SliderEngine<SimulatedHost> {
    let extents = vec![250.0, 300.0, 200.0, 350.0, 250.0, 300.0, 200.0, 400.0];
    let count = extents.len();
    let host = SimulatedHost::new(orientation, 1000.0, extents);
    let mut engine = SliderEngine::new(host, config.with_orientation(orientation));
    for index in 0..count {
        engine.mount_slide(index, index);
    }
    engine.activate();
    pump(&mut engine);
    engine
}

fn main() {
    init_tracing();

    println!("== Buttons");
    let mut slider = build(Orientation::Horizontal, SliderConfig::default());
    println!("{}", describe(&slider));
    while slider.controls().next_enabled {
        slider.scroll_to_next_slide();
        pump(&mut slider);
        println!("next   -> {}", describe(&slider));
    }
    while slider.controls().previous_enabled {
        slider.scroll_to_previous_slide();
        pump(&mut slider);
        println!("prev   -> {}", describe(&slider));
    }

    println!("== Jump");
    slider.scroll_to_slide(5, ScrollBehavior::Smooth);
    pump(&mut slider);
    println!("jump 5 -> {}", describe(&slider));
    slider.scroll_to_slide(1, ScrollBehavior::Instant);
    pump(&mut slider);
    println!("jump 1 -> {}", describe(&slider));

    println!("== Drag");
    slider.pointer_down(PointerButton::Primary, Point::new(600.0, 100.0));
    println!("listeners while dragging: {:?}", slider.host().listeners());
    slider.pointer_move(Point::new(300.0, 100.0));
    slider.pointer_up();
    pump(&mut slider);
    println!("drag   -> {}", describe(&slider));
    let first = slider.click();
    let second = slider.click();
    println!(
        "release click suppressed: {}, next click suppressed: {}",
        first == ClickDisposition::Suppress,
        second == ClickDisposition::Suppress,
    );

    println!("== Vertical, hidden buttons, initial slide 3");
    let config = SliderConfig::default()
        .with_hidden_navigation_buttons(true)
        .with_initial_slide_index(3);
    let mut column = build(Orientation::Vertical, config);
    println!("{}", describe(&column));
    column.scroll_to_next_slide();
    pump(&mut column);
    println!("next   -> {}", describe(&column));
    println!(
        "buttons shown: {}, scrollable: {}",
        column.show_navigation_buttons(),
        column.host().scrollable()
    );

    drop(slider);
    drop(column);
}
