// Example: adapter-driven resize debouncing with a simulated clock and presenter.
use carousel::{Carousel, Changes, Measurement, Presenter};

struct PrintPresenter;

impl Presenter for PrintPresenter {
    fn apply(&mut self, c: &Carousel, changes: &Changes) {
        if changes.layout {
            let mut lefts = Vec::new();
            c.for_each_slide(|s| lefts.push(s.offset));
            println!("  layout: left={lefts:?}");
        }
        if let Some(prev) = changes.previous_index {
            println!("  marker: {prev} -> {}", c.current_index());
        }
        println!(
            "  track translateX({}px), prev.opacity={}, next.opacity={}",
            c.translate_x(),
            c.controls().prev.opacity,
            c.controls().next.opacity
        );
    }
}

fn main() {
    let mut p = PrintPresenter;
    let Some(mut c) = Carousel::new(6, Measurement::new(400.0, 1300.0)) else {
        return;
    };
    println!("init");
    c.present(&mut p);

    c.next();
    c.next();
    println!("after two clicks");
    c.present(&mut p);

    // A window drag produces a burst of resize events; only the last one counts.
    for now_ms in [1_000u64, 1_016, 1_032, 1_048, 1_064] {
        c.notify_resize(now_ms);
    }

    // Simulate a 60fps timer polling the debouncer.
    let mut now_ms = 1_064u64;
    loop {
        now_ms += 16;
        if c.tick(now_ms, || Measurement::new(360.0, 700.0)) {
            println!("relayout at t={now_ms}ms");
            c.present(&mut p);
            break;
        }
    }
    println!(
        "current={} slides_to_show={}",
        c.current_index(),
        c.slides_to_show()
    );
}
