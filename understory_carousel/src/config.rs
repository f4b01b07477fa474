// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration of a [`SliderEngine`](crate::SliderEngine).

use crate::Orientation;
use crate::drag::DEFAULT_CLICK_BLOCK_THRESHOLD;

/// Error returned when parsing configuration values from their string form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input was not `"horizontal"` or `"vertical"`.
    #[error("unknown orientation, expected \"horizontal\" or \"vertical\"")]
    Orientation,
    /// The input was not `"smooth"` or `"instant"`.
    #[error("unknown scroll behavior, expected \"smooth\" or \"instant\"")]
    ScrollBehavior,
}

/// Slider configuration.
///
/// ```
/// use understory_carousel::{Orientation, SliderConfig};
///
/// let config = SliderConfig::default()
///     .with_orientation(Orientation::Vertical)
///     .with_initial_slide_index(3);
/// assert!(!config.hide_navigation_buttons);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SliderConfig {
    /// Do not render the previous/next buttons.
    ///
    /// Control state is still computed and available through
    /// [`SliderEngine::controls`](crate::SliderEngine::controls).
    pub hide_navigation_buttons: bool,
    /// Slide aligned with the leading edge when the slider is first activated.
    pub initial_slide_index: usize,
    /// Active axis. Changing it requires [`SliderEngine::reconfigure`](crate::SliderEngine::reconfigure).
    pub orientation: Orientation,
    /// Distance a drag must exceed along the active axis before the click that
    /// ends it is suppressed.
    pub click_block_threshold: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            hide_navigation_buttons: false,
            initial_slide_index: 0,
            orientation: Orientation::Horizontal,
            click_block_threshold: DEFAULT_CLICK_BLOCK_THRESHOLD,
        }
    }
}

impl SliderConfig {
    /// Sets [`hide_navigation_buttons`](Self::hide_navigation_buttons).
    #[must_use]
    pub fn with_hidden_navigation_buttons(mut self, hide: bool) -> Self {
        self.hide_navigation_buttons = hide;
        self
    }

    /// Sets [`initial_slide_index`](Self::initial_slide_index).
    #[must_use]
    pub fn with_initial_slide_index(mut self, index: usize) -> Self {
        self.initial_slide_index = index;
        self
    }

    /// Sets [`orientation`](Self::orientation).
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets [`click_block_threshold`](Self::click_block_threshold).
    #[must_use]
    pub fn with_click_block_threshold(mut self, threshold: f64) -> Self {
        self.click_block_threshold = threshold;
        self
    }
}
