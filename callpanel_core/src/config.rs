// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and animation constants.
//!
//! Every value here is plain data with a named constructor, so hosts can
//! tweak individual fields with struct update syntax:
//!
//! ```
//! use callpanel_core::config::ButtonMetrics;
//!
//! let metrics = ButtonMetrics {
//!     row_spacing: 64.0,
//!     ..ButtonMetrics::for_width(390.0)
//! };
//! assert_eq!(metrics.item_size, 56.0);
//! ```

use core::time::Duration;

use crate::command::{Curve, Transition};
use crate::layout::RowMetrics;

/// Widths at or below this are treated as narrow screens.
pub const NARROW_WIDTH: f64 = 320.0;

/// Button band geometry for one container width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonMetrics {
    /// Side length of every button.
    pub item_size: f64,
    /// Minimum distance between the container edge and the top row.
    pub small_side_inset: f64,
    /// Upper bound for the gap between top-row buttons.
    pub small_max_spacing: f64,
    /// Minimum distance between the container edge and the bottom row.
    pub large_side_inset: f64,
    /// Upper bound for the gap between bottom-row buttons.
    pub large_max_spacing: f64,
    /// Vertical distance between the top and bottom rows.
    pub row_spacing: f64,
    /// Padding added to the bottom safe-area inset below the bottom row.
    pub bottom_padding: f64,
    /// Lower bound for the space below the bottom row.
    pub min_bottom_space: f64,
}

impl ButtonMetrics {
    /// Returns the metrics for a container of the given width.
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        let small_side_inset = if width > NARROW_WIDTH { 34.0 } else { 16.0 };
        Self {
            item_size: 56.0,
            small_side_inset,
            small_max_spacing: 34.0,
            large_side_inset: small_side_inset - 6.0,
            large_max_spacing: 115.0,
            row_spacing: 84.0,
            bottom_padding: 32.0,
            min_bottom_space: 46.0,
        }
    }

    /// Packing constraints for the top row.
    #[must_use]
    pub const fn top_row(&self) -> RowMetrics {
        RowMetrics {
            item_size: self.item_size,
            min_side_inset: self.small_side_inset,
            max_spacing: self.small_max_spacing,
        }
    }

    /// Packing constraints for the bottom row.
    #[must_use]
    pub const fn bottom_row(&self) -> RowMetrics {
        RowMetrics {
            item_size: self.item_size,
            min_side_inset: self.large_side_inset,
            max_spacing: self.large_max_spacing,
        }
    }

    /// Vertical origin of the bottom row.
    #[must_use]
    pub fn bottom_row_y(&self) -> f64 {
        self.item_size + self.row_spacing
    }

    /// Height of a non-empty button band.
    #[must_use]
    pub fn band_height(&self, bottom_inset: f64) -> f64 {
        self.bottom_row_y()
            + self.item_size
            + (bottom_inset + self.bottom_padding).max(self.min_bottom_space)
    }
}

/// Toast stack geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToastMetrics {
    /// Vertical gap between stacked toasts.
    pub gap: f64,
    /// Horizontal distance between the container edge and the text.
    pub text_inset: f64,
    /// Horizontal padding between the bubble edge and the text.
    pub horizontal_padding: f64,
    /// Vertical padding between the bubble edge and the text.
    pub vertical_padding: f64,
    /// Lower bound for the bubble height.
    pub min_height: f64,
    /// Text baseline offset inside the bubble on regular screens.
    pub text_top: f64,
    /// Text baseline offset inside the bubble on narrow screens.
    pub narrow_text_top: f64,
}

impl Default for ToastMetrics {
    fn default() -> Self {
        Self {
            gap: 18.0,
            text_inset: 30.0,
            horizontal_padding: 12.0,
            vertical_padding: 5.0,
            min_height: 30.0,
            text_top: 4.0,
            narrow_text_top: 5.0,
        }
    }
}

/// Durations, curves and scales of every animation the panels request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    /// Duration of frame, content and exit transitions.
    pub layout_duration: Duration,
    /// Curve of frame, content and exit transitions.
    pub layout_curve: Curve,
    /// Duration of the enter fade.
    pub fade_in: Duration,
    /// Duration of the toast enter grow.
    pub grow_in: Duration,
    /// One step of the staged reveal.
    pub stagger_unit: Duration,
    /// Scale an element shrinks to when it exits with a shrink.
    pub exit_scale: f64,
    /// Scale a toast grows from when it enters.
    pub enter_scale: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            layout_duration: Duration::from_millis(300),
            layout_curve: Curve::Spring,
            fade_in: Duration::from_millis(200),
            grow_in: Duration::from_millis(300),
            stagger_unit: Duration::from_millis(15),
            exit_scale: 0.1,
            enter_scale: 0.01,
        }
    }
}

impl AnimationConfig {
    /// Returns the transition for a pass.
    #[must_use]
    pub const fn transition(&self, animated: bool) -> Transition {
        if animated {
            Transition::Animated {
                duration: self.layout_duration,
                curve: self.layout_curve,
            }
        } else {
            Transition::Immediate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_screens_use_tighter_insets() {
        let wide = ButtonMetrics::for_width(390.0);
        let narrow = ButtonMetrics::for_width(320.0);
        assert_eq!(wide.small_side_inset, 34.0);
        assert_eq!(wide.large_side_inset, 28.0);
        assert_eq!(narrow.small_side_inset, 16.0, "320 counts as narrow");
        assert_eq!(narrow.large_side_inset, 10.0);
    }

    #[test]
    fn band_height_respects_minimum_bottom_space() {
        let metrics = ButtonMetrics::for_width(390.0);
        // 56 + 84 + 56 + max(0 + 32, 46)
        assert_eq!(metrics.band_height(0.0), 242.0);
        // 56 + 84 + 56 + max(34 + 32, 46)
        assert_eq!(metrics.band_height(34.0), 262.0);
    }

    #[test]
    fn bottom_row_sits_below_top_row() {
        assert_eq!(ButtonMetrics::for_width(390.0).bottom_row_y(), 140.0);
    }

    #[test]
    fn immediate_transition_when_not_animated() {
        let config = AnimationConfig::default();
        assert_eq!(config.transition(false), Transition::Immediate);
        assert_eq!(
            config.transition(true),
            Transition::Animated {
                duration: Duration::from_millis(300),
                curve: Curve::Spring,
            }
        );
    }
}
