// SVG animator module: renders a frame plan into one self-contained animated SVG

use std::fs;
use std::path::PathBuf;

use log::info;

use crate::animation::animator::TrajectoryAnimator;
use crate::animation::frame_sequence::{Frame, FrameSequence};
use crate::config::{DISK_MARGIN, FRAME_INTERVAL_MS, VIEW_SIZE};
use crate::interfaces::DiskPoint;
use crate::Result;

// Fixed styling; rendering aesthetics are constants, not interface
const BOUNDARY_COLOR: &str = "black";
const TRAIL_COLOR: &str = "blue";
const CURRENT_COLOR: &str = "red";
const TRAIL_WIDTH: u32 = 2;
const TRAIL_DOT_RADIUS: u32 = 3;
const CURRENT_RADIUS: u32 = 6;

/// Reference trajectory sink: one animated SVG document, one frame group
/// per trajectory point, shown for `FRAME_INTERVAL_MS` each (the final
/// frame stays frozen). The document is assembled in memory and written
/// with a single filesystem call.
#[derive(Debug, Clone)]
pub struct SvgAnimator {
    output: PathBuf,
}

impl SvgAnimator {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        SvgAnimator {
            output: output.into(),
        }
    }

    /// Render the complete SVG document for a frame plan.
    pub fn render(&self, frames: &FrameSequence) -> String {
        let size = VIEW_SIZE;
        let mut svg = String::new();

        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            size, size, size, size
        ));
        svg.push_str(&format!(
            "  <rect width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
            size, size
        ));

        // Unit disk boundary
        let center = size as f64 / 2.0;
        let radius = center / (1.0 + DISK_MARGIN);
        svg.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            center, center, radius, BOUNDARY_COLOR
        ));

        for frame in frames.frames() {
            self.render_frame(&mut svg, &frame, frames.frame_count());
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn render_frame(&self, svg: &mut String, frame: &Frame<'_>, frame_count: usize) {
        let begin_ms = frame.index as u64 * FRAME_INTERVAL_MS;
        let end_ms = begin_ms + FRAME_INTERVAL_MS;

        svg.push_str("  <g opacity=\"0\">\n");

        // Trail line through every point seen so far
        let trail: Vec<String> = frame
            .trail
            .iter()
            .map(|&p| {
                let (x, y) = disk_to_view(p);
                format!("{:.2},{:.2}", x, y)
            })
            .collect();
        svg.push_str(&format!(
            "    <polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            trail.join(" "),
            TRAIL_COLOR,
            TRAIL_WIDTH
        ));

        // Trail markers
        for &p in frame.trail {
            let (x, y) = disk_to_view(p);
            svg.push_str(&format!(
                "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\" fill-opacity=\"0.6\"/>\n",
                x, y, TRAIL_DOT_RADIUS, TRAIL_COLOR
            ));
        }

        // Highlighted current point
        let (cx, cy) = disk_to_view(frame.current);
        svg.push_str(&format!(
            "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>\n",
            cx, cy, CURRENT_RADIUS, CURRENT_COLOR
        ));

        // Visibility window; the last frame freezes instead of ending
        if frame.index + 1 == frame_count {
            svg.push_str(&format!(
                "    <set attributeName=\"opacity\" to=\"1\" begin=\"{}ms\" fill=\"freeze\"/>\n",
                begin_ms
            ));
        } else {
            svg.push_str(&format!(
                "    <set attributeName=\"opacity\" to=\"1\" begin=\"{}ms\" end=\"{}ms\"/>\n",
                begin_ms, end_ms
            ));
        }

        svg.push_str("  </g>\n");
    }
}

impl TrajectoryAnimator for SvgAnimator {
    fn animate(&mut self, frames: &FrameSequence) -> Result<()> {
        let svg = self.render(frames);
        fs::write(&self.output, svg)?;
        info!(
            "wrote {} frames to {}",
            frames.frame_count(),
            self.output.display()
        );
        Ok(())
    }
}

/// Map disk coordinates to the SVG viewport (y axis flipped).
fn disk_to_view(p: DiskPoint) -> (f64, f64) {
    let span = 2.0 * (1.0 + DISK_MARGIN);
    let scale = VIEW_SIZE as f64 / span;
    let x = (p.re + 1.0 + DISK_MARGIN) * scale;
    let y = (1.0 + DISK_MARGIN - p.im) * scale;
    (x, y)
}
