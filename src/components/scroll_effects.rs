//! Scroll-linked values for section animations.
//!
//! Progress runs from 0 when the top of an element enters the bottom of the
//! viewport to 1 when its bottom leaves the top.

use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Piecewise-linear interpolation of `x` over `(input, output)` stops, held
/// constant outside the first and last stop.
pub fn interpolate(x: f64, stops: &[(f64, f64)]) -> f64 {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return 0.0,
    };
    if x <= first.0 {
        return first.1;
    }
    if x >= last.0 {
        return last.1;
    }
    for pair in stops.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        if x <= x1 {
            if x1 == x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    last.1
}

fn element_progress(node: &NodeRef) -> Option<f64> {
    let element = node.cast::<Element>()?;
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(scroll_progress(rect.top(), rect.height(), viewport_height))
}

/// Scroll progress of the element behind `node`, updated on window scroll.
#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    let progress = use_state(|| 0.0_f64);
    let (_, scroll_y) = use_window_scroll();

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(p) = element_progress(&node) {
                    if (p - *progress).abs() > f64::EPSILON {
                        progress.set(p);
                    }
                }
                || ()
            },
            scroll_y,
        );
    }

    *progress
}

/// Becomes true the first time the element scrolls into view and stays true.
#[hook]
pub fn use_revealed(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    let progress = use_scroll_progress(node);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |progress| {
                if *progress > 0.0 && !*revealed {
                    revealed.set(true);
                }
                || ()
            },
            progress,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_enter_to_exit() {
        // 800px viewport, 400px section
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert!((scroll_progress(200.0, 400.0, 800.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(2000.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-5000.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn interpolates_fade_in_hold_fade_out() {
        let stops = [(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)];
        assert_eq!(interpolate(0.0, &stops), 0.0);
        assert!((interpolate(0.1, &stops) - 0.5).abs() < 1e-9);
        assert_eq!(interpolate(0.5, &stops), 1.0);
        assert!((interpolate(0.9, &stops) - 0.5).abs() < 1e-9);
        assert_eq!(interpolate(1.0, &stops), 0.0);
    }

    #[test]
    fn interpolation_holds_outside_stops() {
        let stops = [(0.0, 0.8), (0.2, 1.0)];
        assert_eq!(interpolate(-1.0, &stops), 0.8);
        assert_eq!(interpolate(0.7, &stops), 1.0);
        assert_eq!(interpolate(0.5, &[]), 0.0);
    }
}
