//! Thin demo binary.
//!
//! `ductus` is primarily a library; this binary exists to preserve the
//! convenience of `cargo run` and to eyeball the pipeline without a host
//! UI: it builds a fitted path for a string using system fonts and prints
//! SVG snapshots of the stroke at a few progress values.
//!
//! Run:
//! - `cargo run` (defaults to "Trace")
//! - `cargo run -- "AB"` to pick the text

use std::time::Duration;

use anyhow::Context;
use lyon::math::{Box2D, point};

use ductus::path::{svg_path_data, trim::path_length};
use ductus::{
    AnimationMode, FontQuery, FontSystem, OrderMode, PathShape, StrokeAnimator, TextLayoutOptions,
    TextPathShape,
};

fn main() -> anyhow::Result<()> {
    // Keep logging setup in the binary so the library stays unopinionated.
    env_logger::init();

    let text = std::env::args().nth(1).unwrap_or_else(|| "Trace".to_string());

    let fonts = FontSystem::new().context("loading system fonts")?;
    log::info!("font database: {} faces", fonts.face_count());

    let shape = TextPathShape::new(
        &fonts,
        &text,
        &FontQuery::default(),
        &TextLayoutOptions::default(),
        &OrderMode::Standard,
    )
    .with_context(|| format!("building glyph outlines for {text:?}"))?;

    let rect = Box2D {
        min: point(0.0, 0.0),
        max: point(512.0, 256.0),
    };
    let full = shape.path(rect).context("fitting path")?;

    log::info!(
        "{} glyphs, outline length {:.1} in a {:.0}x{:.0} rect",
        shape.glyph_count(),
        path_length(&full),
        rect.width(),
        rect.height()
    );

    // Drive the animator the way a host would, one coarse "frame" per
    // snapshot, and print what would be stroked at each point.
    let mut animator = StrokeAnimator::new(AnimationMode::ProgressiveDraw, Duration::from_secs(4))?;

    println!("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 512 256\">");
    for step in 0..4 {
        animator.tick(Duration::from_secs(1));
        let p = animator.progress();
        let trimmed = match p {
            ductus::Progress::Fraction(f) => ductus::path::trim::trim_path(&full, 0.0, f),
            ductus::Progress::Window { from, to } => {
                ductus::path::trim::trim_path(&full, from, to)
            }
        };
        println!(
            "  <!-- after {}s: {:?} -->\n  <path fill=\"none\" stroke=\"black\" opacity=\"{:.2}\" d=\"{}\"/>",
            step + 1,
            p,
            0.25 * (step + 1) as f32,
            svg_path_data(&trimmed)
        );
    }
    println!("</svg>");

    Ok(())
}
