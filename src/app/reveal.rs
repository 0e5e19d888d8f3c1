use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Portion of a section that must be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Latches to `true` the first time `target` crosses `threshold` visibility.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64) -> Signal<bool> {
    let (visible, set_visible) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if !visible.get_untracked() && entries.iter().any(|e| e.is_intersecting()) {
                set_visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    visible.into()
}

pub fn fade_up(visible: bool) -> &'static str {
    if visible {
        "animate-fadeInUp"
    } else {
        "opacity-0 translate-y-8"
    }
}

pub fn slide_left(visible: bool) -> &'static str {
    if visible {
        "animate-slideInLeft"
    } else {
        "opacity-0 -translate-x-8"
    }
}

pub fn slide_right(visible: bool) -> &'static str {
    if visible {
        "animate-slideInRight"
    } else {
        "opacity-0 translate-x-8"
    }
}
