// Copyright 2026 the Callpanel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame computation for button rows and toast stacks.
//!
//! Button rows are packed by [`solve_row`]: items keep their size and the
//! gaps between them shrink from `max_spacing` toward whatever keeps the row
//! inside the side insets. Gaps are never clamped, so on degenerate widths
//! they may become negative and items overlap.
//!
//! Toasts span the full container width and stack top to bottom; only the
//! bubble inside each toast is sized from its text.

use alloc::vec::Vec;

use kurbo::{Rect, Size};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::button::{ButtonDescriptor, ButtonRows};
use crate::config::{ButtonMetrics, NARROW_WIDTH, ToastMetrics};
use crate::toast::{TextMeasure, TextStyle};

/// Packing constraints for one row of equally sized items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowMetrics {
    /// Side length of every item.
    pub item_size: f64,
    /// Minimum distance between the container edge and the outer items.
    pub min_side_inset: f64,
    /// Upper bound for the gap between neighbours.
    pub max_spacing: f64,
}

/// Lays out `count` items left to right in a row at `y`.
///
/// A single item is centred at `floor((width - item_size) / 2)`.
#[must_use]
pub fn solve_row(count: usize, width: f64, metrics: &RowMetrics, y: f64) -> Vec<Rect> {
    let size = metrics.item_size;
    let item = |x: f64| Rect::from_origin_size((x, y), (size, size));
    match count {
        0 => Vec::new(),
        1 => alloc::vec![item(((width - size) / 2.0).floor())],
        _ => {
            let n = count as f64;
            let available = width - n * size - metrics.min_side_inset * 2.0;
            let spacing = metrics.max_spacing.min(available / (n - 1.0));
            let total = n * size + (n - 1.0) * spacing;
            let left = ((width - total) / 2.0).floor();
            (0..count)
                .map(|i| item(left + i as f64 * (size + spacing)))
                .collect()
        }
    }
}

/// A descriptor with its frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placed<D> {
    /// What is drawn.
    pub descriptor: D,
    /// Where, in panel coordinates.
    pub frame: Rect,
}

/// Frames of every button and the height of the band.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonLayout {
    /// Buttons in descriptor order, top row first.
    pub placed: Vec<Placed<ButtonDescriptor>>,
    /// Band height; zero when there are no buttons.
    pub height: f64,
}

/// Lays out both button rows.
#[must_use]
pub fn layout_buttons(
    rows: &ButtonRows,
    width: f64,
    bottom_inset: f64,
    metrics: &ButtonMetrics,
) -> ButtonLayout {
    if rows.is_empty() {
        return ButtonLayout {
            placed: Vec::new(),
            height: 0.0,
        };
    }

    let top = solve_row(rows.top.len(), width, &metrics.top_row(), 0.0);
    let bottom = solve_row(
        rows.bottom.len(),
        width,
        &metrics.bottom_row(),
        metrics.bottom_row_y(),
    );
    let placed = rows
        .iter()
        .zip(top.into_iter().chain(bottom))
        .map(|(&descriptor, frame)| Placed { descriptor, frame })
        .collect();

    ButtonLayout {
        placed,
        height: metrics.band_height(bottom_inset),
    }
}

/// Returns the toast text style for a container width.
#[must_use]
pub fn text_style(width: f64) -> TextStyle {
    if width <= NARROW_WIDTH {
        TextStyle::Small
    } else {
        TextStyle::Regular
    }
}

/// Bubble geometry inside one toast, relative to the toast's own frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToastBubble {
    /// Rounded background, horizontally centred.
    pub bubble: Rect,
    /// Text block inside the bubble.
    pub text: Rect,
    /// Style the text was measured with.
    pub style: TextStyle,
}

impl ToastBubble {
    /// Height the toast occupies in the stack.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bubble.height()
    }
}

/// Measures `text` and sizes its bubble for a container of `width`.
pub fn measure_toast(
    text: &str,
    width: f64,
    metrics: &ToastMetrics,
    measure: &mut dyn TextMeasure,
) -> ToastBubble {
    let style = text_style(width);
    let text_size = measure.measure(text, style, width - metrics.text_inset * 2.0);
    let bubble_size = Size::new(
        text_size.width + metrics.horizontal_padding * 2.0,
        metrics
            .min_height
            .max(text_size.height + metrics.vertical_padding * 2.0),
    );
    let bubble =
        Rect::from_origin_size((((width - bubble_size.width) / 2.0).floor(), 0.0), bubble_size);
    let text_top = match style {
        TextStyle::Regular => metrics.text_top,
        TextStyle::Small => metrics.narrow_text_top,
    };
    ToastBubble {
        bubble,
        text: Rect::from_origin_size((metrics.horizontal_padding, text_top), text_size),
        style,
    }
}

/// Frames of every toast and the height of the stack.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastStack {
    /// Full-width toast frames, top to bottom.
    pub frames: Vec<Rect>,
    /// Stack height; zero when there are no toasts.
    pub height: f64,
}

/// Stacks toasts of the given heights with `metrics.gap` between them.
#[must_use]
pub fn stack_toasts(heights: &[f64], width: f64, metrics: &ToastMetrics) -> ToastStack {
    let mut y = 0.0;
    let frames = heights
        .iter()
        .map(|&height| {
            let frame = Rect::new(0.0, y, width, y + height);
            y += height + metrics.gap;
            frame
        })
        .collect();
    let height = if heights.is_empty() { 0.0 } else { y - metrics.gap };
    ToastStack { frames, height }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::button::{EndKind, classify_buttons};
    use crate::call::{CallMode, CallPhase};

    fn bottom(width: f64) -> RowMetrics {
        ButtonMetrics::for_width(width).bottom_row()
    }

    #[test]
    fn empty_row_has_no_frames() {
        assert!(solve_row(0, 390.0, &bottom(390.0), 0.0).is_empty());
    }

    #[test]
    fn single_item_is_centred() {
        let frames = solve_row(1, 375.0, &bottom(375.0), 10.0);
        assert_eq!(frames, vec![Rect::new(159.0, 10.0, 215.0, 66.0)]);
    }

    #[test]
    fn spacing_is_capped_on_wide_containers() {
        let frames = solve_row(2, 1000.0, &bottom(1000.0), 0.0);
        assert_eq!(frames[1].x0 - frames[0].x1, 115.0);
        // total = 56 * 2 + 115 = 227, left = floor((1000 - 227) / 2)
        assert_eq!(frames[0].x0, 386.0);
    }

    #[test]
    fn spacing_shrinks_to_keep_side_insets() {
        let width = 320.0;
        let metrics = bottom(width);
        let frames = solve_row(5, width, &metrics, 0.0);
        let first = frames[0];
        let last = frames[4];
        assert!(
            first.x0 >= metrics.min_side_inset - 1.0,
            "left inset kept: {first:?}"
        );
        assert!(
            width - last.x1 >= metrics.min_side_inset - 1.0,
            "right inset kept: {last:?}"
        );
        let gaps: Vec<f64> = frames.windows(2).map(|w| w[1].x0 - w[0].x1).collect();
        assert!(
            gaps.iter().all(|&g| (g - gaps[0]).abs() < 1e-9),
            "gaps are uniform: {gaps:?}"
        );
    }

    #[test]
    fn width_is_conserved() {
        for width in [320.0, 375.0, 390.0, 428.0, 768.0] {
            let metrics = bottom(width);
            for count in 2..=5 {
                let frames = solve_row(count, width, &metrics, 0.0);
                let span = frames[count - 1].x1 - frames[0].x0;
                let slack = width - span;
                assert!(
                    slack >= 2.0 * metrics.min_side_inset - 1.0,
                    "{count} items at {width} overflow the insets"
                );
                let left = frames[0].x0;
                let right = width - frames[count - 1].x1;
                assert!(
                    (left - right).abs() <= 1.0,
                    "{count} items at {width} are centred ({left} vs {right})"
                );
            }
        }
    }

    #[test]
    fn degenerate_width_overlaps_instead_of_failing() {
        let frames = solve_row(4, 100.0, &bottom(100.0), 0.0);
        assert_eq!(frames.len(), 4);
        assert!(frames[1].x0 < frames[0].x1, "gaps went negative");
    }

    #[test]
    fn buttons_sit_in_the_bottom_row() {
        let rows = classify_buttons(&CallPhase::Active(CallMode::default()), false);
        let metrics = ButtonMetrics::for_width(390.0);
        let layout = layout_buttons(&rows, 390.0, 34.0, &metrics);
        assert_eq!(layout.placed.len(), 4);
        assert!(layout.placed.iter().all(|p| p.frame.y0 == 140.0));
        assert_eq!(
            layout.placed[3].descriptor,
            ButtonDescriptor::End(EndKind::Outgoing)
        );
        assert_eq!(layout.height, 262.0);
    }

    #[test]
    fn empty_band_has_no_height() {
        let layout = layout_buttons(
            &ButtonRows::default(),
            390.0,
            34.0,
            &ButtonMetrics::for_width(390.0),
        );
        assert!(layout.placed.is_empty());
        assert_eq!(layout.height, 0.0);
    }

    struct FixedMeasure(Size);

    impl TextMeasure for FixedMeasure {
        fn measure(&mut self, _text: &str, _style: TextStyle, max_width: f64) -> Size {
            Size::new(self.0.width.min(max_width), self.0.height)
        }
    }

    #[test]
    fn bubble_pads_text_and_centres() {
        let mut measure = FixedMeasure(Size::new(100.0, 19.0));
        let bubble = measure_toast("Camera is off", 390.0, &ToastMetrics::default(), &mut measure);
        assert_eq!(bubble.style, TextStyle::Regular);
        assert_eq!(bubble.bubble, Rect::new(133.0, 0.0, 257.0, 30.0));
        assert_eq!(bubble.text, Rect::new(12.0, 4.0, 112.0, 23.0));
    }

    #[test]
    fn tall_text_grows_bubble_and_narrow_screens_use_small_text() {
        let mut measure = FixedMeasure(Size::new(400.0, 40.0));
        let bubble = measure_toast("long", 320.0, &ToastMetrics::default(), &mut measure);
        assert_eq!(bubble.style, TextStyle::Small);
        assert_eq!(bubble.height(), 50.0);
        assert_eq!(bubble.text.width(), 260.0, "text wraps at width - 60");
        assert_eq!(bubble.text.y0, 5.0);
    }

    #[test]
    fn toasts_stack_with_gaps() {
        let stack = stack_toasts(&[30.0, 50.0], 390.0, &ToastMetrics::default());
        assert_eq!(
            stack.frames,
            vec![
                Rect::new(0.0, 0.0, 390.0, 30.0),
                Rect::new(0.0, 48.0, 390.0, 98.0)
            ]
        );
        assert_eq!(stack.height, 98.0);
        assert_eq!(stack_toasts(&[], 390.0, &ToastMetrics::default()).height, 0.0);
    }
}
