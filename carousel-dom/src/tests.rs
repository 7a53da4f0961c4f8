use carousel::Measurement;

use crate::presenter::{css_opacity, css_px, css_translate_x, marker_updates};
use crate::widget::{ResizeWake, wake_resize};
use crate::*;

fn desktop(count: usize) -> Carousel {
    Carousel::new(count, Measurement::new(300.0, 1280.0)).unwrap()
}

/// Replays class writes onto per-slide flags, the way `classList` add/remove would.
fn apply_markers(marked: &mut [bool], updates: &[(usize, bool)]) {
    for &(index, current) in updates {
        marked[index] = current;
    }
}

#[test]
fn css_values_match_the_inline_style_format() {
    assert_eq!(css_px(0.0), "0px");
    assert_eq!(css_px(300.0), "300px");
    assert_eq!(css_px(412.5), "412.5px");
    assert_eq!(css_translate_x(-600.0), "translateX(-600px)");
    // No "-0px" for the first slide.
    assert_eq!(css_translate_x(-0.0), "translateX(0px)");
    assert_eq!(css_opacity(0.3), "0.3");
    assert_eq!(css_opacity(1.0), "1");
}

#[test]
fn css_translate_follows_the_engine_track_offset() {
    let mut c = Carousel::new(4, carousel::Measurement::new(250.0, 1400.0)).unwrap();
    assert_eq!(css_translate_x(c.translate_x()), "translateX(0px)");
    c.next();
    c.next();
    assert_eq!(css_translate_x(c.translate_x()), "translateX(-500px)");
    assert_eq!(css_opacity(c.controls().next.opacity), "0.3");
    assert_eq!(css_opacity(c.controls().prev.opacity), "1");
}

#[test]
fn default_selectors_match_the_markup_contract() {
    let s = Selectors::default();
    assert_eq!(s.container, ".team-carousel");
    assert_eq!(s.track, ".team-carousel__track");
    assert_eq!(s.control(Direction::Prev), ".carousel-button--prev");
    assert_eq!(s.control(Direction::Next), ".carousel-button--next");
    assert_eq!(s.current_class, "current-slide");
}

#[test]
fn mount_errors_name_what_is_missing() {
    assert_eq!(
        MountError::ContainerMissing(".team-carousel".into()).to_string(),
        "carousel container `.team-carousel` not found"
    );
    assert_eq!(
        MountError::ControlMissing {
            direction: Direction::Next,
            selector: ".carousel-button--next".into(),
        }
        .to_string(),
        "Next control `.carousel-button--next` not found or not a button"
    );
    assert_eq!(
        MountError::NoSlides.to_string(),
        "carousel track has no slides"
    );
    assert_eq!(
        MountError::Listener {
            event: "resize",
            message: "denied".into(),
        }
        .to_string(),
        "failed to register `resize` listener: denied"
    );
}

#[test]
fn layout_rewrites_every_marker() {
    let mut c = desktop(5);
    let changes = c.take_changes();
    assert!(changes.layout);
    let updates = marker_updates(&c, &changes);
    assert_eq!(
        updates,
        vec![(0, true), (1, false), (2, false), (3, false), (4, false)]
    );
}

#[test]
fn move_swaps_marker_from_previous_slide() {
    let mut c = desktop(5);
    let mut marked = vec![false; 5];
    let initial = c.take_changes();
    apply_markers(&mut marked, &marker_updates(&c, &initial));

    c.next();
    c.next();
    let changes = c.take_changes();
    assert_eq!(changes.previous_index, Some(0));
    let updates = marker_updates(&c, &changes);
    assert_eq!(updates, vec![(0, false), (2, true)]);
    apply_markers(&mut marked, &updates);
    assert_eq!(marked, vec![false, false, true, false, false]);

    // Out and back between presents: the marker must survive the round trip.
    c.next();
    c.prev();
    let changes = c.take_changes();
    let updates = marker_updates(&c, &changes);
    assert_eq!(updates, vec![(2, false), (2, true)]);
    apply_markers(&mut marked, &updates);
    assert_eq!(marked.iter().filter(|m| **m).count(), 1);
    assert!(marked[2]);

    let changes = c.take_changes();
    assert!(changes.is_empty());
    assert!(marker_updates(&c, &changes).is_empty());
}

#[test]
fn resize_timer_rearms_until_the_burst_settles() {
    let mut c = desktop(5);
    c.go_to(2);
    let never = || -> Measurement { panic!("measured before the debounce elapsed") };

    assert_eq!(wake_resize(&mut c, 0, never), ResizeWake::Idle);

    c.notify_resize(0);
    c.notify_resize(80);
    assert_eq!(wake_resize(&mut c, 100, never), ResizeWake::Rearm(80));
    assert_eq!(wake_resize(&mut c, 179, never), ResizeWake::Rearm(1));

    let woke = wake_resize(&mut c, 180, || Measurement::new(400.0, 400.0));
    assert_eq!(woke, ResizeWake::Relaid);
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.slides_to_show(), 1);
    assert_eq!(css_translate_x(c.translate_x()), "translateX(-800px)");

    assert_eq!(wake_resize(&mut c, 500, never), ResizeWake::Idle);
}

#[test]
fn controls_are_addressable_by_direction() {
    let mut c = desktop(5);
    assert!(c.controls().get(Direction::Prev).disabled);
    assert!(!c.controls().get(Direction::Next).disabled);
    c.go_to(2);
    assert_eq!(css_opacity(c.controls().get(Direction::Next).opacity), "0.3");
    assert_eq!(css_opacity(c.controls().get(Direction::Prev).opacity), "1");
}
