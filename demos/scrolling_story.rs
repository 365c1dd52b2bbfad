//! Two stacked story sections sharing one option list: content fades,
//! slides, and un-rotates into place over the first 90% of each
//! container, then fades back out over the last 10%.
//!
//! Run with `RUST_LOG=trace` to see every style write.

use scrollstyle::prelude::*;

fn main() {
    env_logger::init();

    let dom = MemoryDom::with_viewport_height(600.0);
    dom.insert_element("container-1", 1200.0, 0.0);
    let content_1 = dom.insert_element("content-1", 400.0, 100.0);
    dom.insert_element("container-2", 1200.0, 1200.0);
    let content_2 = dom.insert_element("content-2", 400.0, 1300.0);

    let options = vec![
        AnimationOption::range(0.0, 90.0)
            .style(StyleProperty::Opacity, 0, 1)
            .style(StyleProperty::TranslateY, "-100", "0")
            .style(StyleProperty::Scale, 0.5, 1.0)
            .style(StyleProperty::Rotate, 45, 0)
            .style(StyleProperty::Blur, 4, 0)
            .style(StyleProperty::Background, "#bb99ff", "#ab6f33"),
        AnimationOption::range(90.0, 100.0)
            .style(StyleProperty::Opacity, 1, 0)
            .style(StyleProperty::Scale, 1.0, 0.5)
            .style(StyleProperty::Background, "#ab6f33", "#bb99ff"),
    ];

    let _first =
        scrollstyle::bind(&dom, "container-1", "content-1", &options).expect("container-1");
    let _second =
        scrollstyle::bind(&dom, "container-2", "content-2", &options).expect("container-2");

    for step in 0..=16 {
        let offset = f64::from(step) * 150.0;
        dom.scroll_to(offset);
        println!("scroll {offset:>6}");
        print_styles("content-1", &content_1);
        print_styles("content-2", &content_2);
    }
}

fn print_styles(label: &str, element: &MemoryElement) {
    let mut styles: Vec<(String, String)> = element.styles().into_iter().collect();
    styles.sort();
    let line = styles
        .iter()
        .map(|(property, value)| format!("{property}: {value}"))
        .collect::<Vec<_>>()
        .join("; ");
    println!("  {label:<10} {line}");
}
