//! A fuller document: headings, paragraphs, lists and code runs, rendered
//! with custom options.
//!
//! Run with: cargo run --example report

use vellum::{RenderOptions, render};

const REPORT: &str = r#"
<h1>Quarterly Summary</h1>
<p>Revenue grew in <b>all three</b> segments, led by the <mark>platform</mark> business.</p>
<h2>Highlights</h2>
<ul>
    <li>Launched the <code>v2 ingest</code> pipeline</li>
    <li>Expanded to <i>four</i> new regions
        <ul>
            <li>Two in <b>EMEA</b></li>
            <li>Two in <b>APAC</b></li>
        </ul>
    </li>
    <li>Retired the legacy importer <s>ahead of schedule</s></li>
</ul>
<h2>Next steps</h2>
<ol>
    <li>Close the <a href="/plans/q3">Q3 plan</a></li>
    <li>Ship H<sub>2</sub>O usage dashboards</li>
</ol>
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = RenderOptions {
        font_size: Some(15.0),
        wrap_width: Some(520.0),
        font_family: Some("Georgia, serif".to_string()),
        ..Default::default()
    };

    let rendered = render(REPORT, &options)?;
    for error in &rendered.errors {
        eprintln!("warning: {error}");
    }
    println!("{}", serde_json::to_string_pretty(&rendered.spec)?);
    eprintln!(
        "canvas: {:.0} x {:.0}, {} layers",
        rendered.bounds.width,
        rendered.bounds.height,
        rendered.spec["layer"].as_array().map_or(0, Vec::len)
    );
    Ok(())
}
