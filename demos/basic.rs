//! Minimal end-to-end run: render a snippet and print the spec document.
//!
//! Run with: cargo run --example basic

use vellum::{RenderOptions, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let html = r#"Welcome to <b>vellum</b>, which turns <i>inline HTML</i> into
        <a href="https://vega.github.io/vega-lite/">chart-grammar</a> text layers."#;

    let rendered = render(html, &RenderOptions::default())?;
    for error in &rendered.errors {
        eprintln!("warning: {error}");
    }
    println!("{}", serde_json::to_string_pretty(&rendered.spec)?);
    eprintln!(
        "canvas: {:.0} x {:.0}",
        rendered.bounds.width, rendered.bounds.height
    );
    Ok(())
}
