//! Animation options supplied as JSON, mixing both supported schema
//! shapes: the nested `percentage`/`styles` form and the flat
//! `from`/`fromCss`/`to`/`toCss` form.

use scrollstyle::prelude::*;

const OPTIONS: &str = r#"[
    {
        "percentage": {"from": 0, "to": 90},
        "styles": {
            "opacity":    {"from": 0, "to": 1},
            "translateY": {"from": "-100", "to": "0"},
            "color":      {"from": "hsl(270 100% 80%)", "to": "hsl(27 53% 43%)"}
        }
    },
    {
        "from": 90,
        "fromCss": {"opacity": 1, "scale": 1},
        "to": 100,
        "toCss": {"opacity": 0, "scale": 0.5}
    }
]"#;

fn main() {
    env_logger::init();

    let options: Vec<AnimationOption> = serde_json::from_str(OPTIONS).expect("well-formed options");

    let dom = MemoryDom::with_viewport_height(500.0);
    dom.insert_element("section", 1000.0, 1000.0);
    let heading = dom.insert_element("heading", 120.0, 1040.0);

    let _binding = scrollstyle::bind(&dom, "section", "heading", &options).expect("binding");

    for offset in [0.0, 500.0, 950.0, 1420.0, 1480.0, 1600.0] {
        dom.scroll_to(offset);
        println!(
            "scroll {offset:>6}  visibility={:<7}  opacity={:<20}  transform={:?}",
            heading.style("visibility").unwrap_or_default(),
            heading.style("opacity").unwrap_or_default(),
            heading.style("transform").unwrap_or_default(),
        );
    }
}
