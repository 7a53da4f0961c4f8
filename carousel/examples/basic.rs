// Example: minimal usage, navigating a five-slide carousel on a wide viewport.
use carousel::{Carousel, Measurement};

fn main() {
    let Some(mut c) = Carousel::new(5, Measurement::new(320.0, 1440.0)) else {
        return;
    };
    println!(
        "slides_to_show={} controls={:?}",
        c.slides_to_show(),
        c.controls()
    );

    while c.next() {
        println!(
            "current={} translate_x={} visible={:?} next_disabled={}",
            c.current_index(),
            c.translate_x(),
            c.visible_range(),
            c.controls().next.disabled
        );
    }
    println!("at the end: next() is a no-op -> {}", c.next());

    while c.prev() {}
    println!("back at start: prev_disabled={}", c.controls().prev.disabled);
}
