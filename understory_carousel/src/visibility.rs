// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification of intersection ratios into coarse visibility states.

/// Intersection ratio at or above which a slide counts as fully visible.
pub const FULL_VISIBILITY_RATIO: f64 = 0.9;

/// Intersection ratio at or above which a slide counts as partially visible.
pub const PARTIAL_VISIBILITY_RATIO: f64 = 0.5;

/// Ratios at which the observation service should report changes.
///
/// Classification never distinguishes `0.9` from `1.0`, so there is no `1.0` trigger.
pub const OBSERVATION_THRESHOLDS: [f64; 3] = [0.0, PARTIAL_VISIBILITY_RATIO, FULL_VISIBILITY_RATIO];

/// Coarse visibility of a slide inside the scroll container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// At least 90% of the slide is inside the viewport.
    Full,
    /// Between 50% (inclusive) and 90% (exclusive) of the slide is inside the viewport.
    Partial,
    /// Less than half of the slide is inside the viewport.
    None,
}

impl Visibility {
    /// Classifies an intersection ratio.
    ///
    /// Ratios are expected to lie in `[0, 1]`. Anything below `0.5` (including NaN)
    /// is [`Visibility::None`] and anything from `0.9` up is [`Visibility::Full`].
    ///
    /// ```
    /// use understory_carousel::Visibility;
    ///
    /// assert_eq!(Visibility::from_ratio(1.0), Visibility::Full);
    /// assert_eq!(Visibility::from_ratio(0.5), Visibility::Partial);
    /// assert_eq!(Visibility::from_ratio(0.49), Visibility::None);
    /// ```
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= FULL_VISIBILITY_RATIO {
            Self::Full
        } else if ratio >= PARTIAL_VISIBILITY_RATIO {
            Self::Partial
        } else {
            Self::None
        }
    }
}
