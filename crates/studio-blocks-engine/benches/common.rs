// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use serde_json::{Value, json};

#[allow(dead_code)]
pub fn generate_page(sections: usize) -> Value {
    let content: Vec<Value> = (0..sections).map(generate_section).collect();
    json!({
        "_id": "bench-page",
        "_type": "page",
        "title": "Benchmark",
        "content": content,
    })
}

#[allow(dead_code)]
fn generate_section(index: usize) -> Value {
    let cards: Vec<Value> = (0..6)
        .map(|i| {
            json!({
                "_type": "card",
                "_key": format!("card{i}"),
                "title": format!("Card {i}"),
                "body": "Card body text.",
                "content": [{ "_type": "divider", "_key": "d" }]
            })
        })
        .collect();

    json!({
        "_type": "section",
        "_key": format!("s{index}"),
        "title": format!("Section {index}"),
        "content": [
            {
                "_type": "text",
                "_key": "intro",
                "body": [{
                    "_type": "block",
                    "_key": "p",
                    "children": [
                        { "_type": "span", "text": "Some paragraph content with " },
                        { "_type": "span", "text": "marks", "marks": ["strong"] }
                    ]
                }]
            },
            {
                "_type": "two-column-layout",
                "_key": "cols",
                "ratio": "60/40",
                "leftColumn": [
                    { "_type": "statement", "_key": "st", "text": "A short statement." },
                    { "_type": "button-link", "_key": "btn", "label": "Contact", "href": "/contact" }
                ],
                "rightColumn": [{
                    "_type": "image",
                    "_key": "img",
                    "image": { "asset": { "_ref": "image-abc123-1600x900-jpg" }, "alt": "Studio" }
                }]
            },
            {
                "_type": "grid-layout",
                "_key": "grid",
                "columns": 3,
                "items": cards
            },
            { "_type": "mystery-block", "_key": "unknown" }
        ]
    })
}
