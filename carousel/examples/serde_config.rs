// Example: loading carousel options from JSON (requires `--features serde`).
use carousel::{Carousel, CarouselOptions, Measurement};

fn main() {
    let json = r#"{
        "breakpoints": {
            "steps": [
                { "min_width": 1200.0, "slides": 4 },
                { "min_width": 640.0, "slides": 2 }
            ],
            "fallback": 1
        },
        "resize_debounce_ms": 150,
        "recompute_slides_to_show_on_resize": false
    }"#;

    let opts: CarouselOptions = match serde_json::from_str(json) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };
    println!("{opts:?}");

    let Some(mut c) = Carousel::with_options(8, Measurement::new(280.0, 1300.0), opts) else {
        return;
    };
    c.go_to(3);
    match serde_json::to_string_pretty(&c.frame()) {
        Ok(s) => println!("{s}"),
        Err(err) => eprintln!("failed to encode frame: {err}"),
    }
}
