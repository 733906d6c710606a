use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use tracing::debug;

use crate::error::ReadError;
use crate::models::{PolygonPoint, ReadResult};

const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 255, 255]);
const STROKE_WIDTH: f32 = 3.0;

/// Which detected regions get outlined, and under what output name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Lines,
    Words,
}

impl Granularity {
    pub fn output_file(&self) -> &'static str {
        match self {
            Granularity::Lines => "lines.jpg",
            Granularity::Words => "words.jpg",
        }
    }

    fn polygons<'a>(&self, page: Option<&'a ReadResult>) -> Vec<&'a [PolygonPoint]> {
        let Some(page) = page else {
            return Vec::new();
        };
        match self {
            Granularity::Lines => page
                .first_block_lines()
                .iter()
                .map(|line| line.bounding_polygon.as_slice())
                .collect(),
            Granularity::Words => page
                .first_block_lines()
                .iter()
                .flat_map(|line| &line.words)
                .map(|word| word.bounding_polygon.as_slice())
                .collect(),
        }
    }
}

/// Outlines every region of the requested granularity on a fresh copy of the
/// input image and writes it to the fixed output name, overwriting. The input
/// file itself is never touched. An absent page still produces a valid,
/// unmarked output image.
pub fn annotate(
    image_path: &Path,
    page: Option<&ReadResult>,
    granularity: Granularity,
    output_dir: &Path,
) -> Result<PathBuf, ReadError> {
    let output_path = output_dir.join(granularity.output_file());
    annotate_inner(image_path, page, granularity, &output_path).map_err(|source| {
        ReadError::Annotation {
            path: output_path,
            source,
        }
    })
}

fn annotate_inner(
    image_path: &Path,
    page: Option<&ReadResult>,
    granularity: Granularity,
    output_path: &Path,
) -> Result<PathBuf> {
    let mut canvas = image::open(image_path)
        .with_context(|| format!("failed to open image {}", image_path.display()))?
        .to_rgb8();

    let polygons = granularity.polygons(page);
    debug!(?granularity, regions = polygons.len(), "drawing region outlines");
    for polygon in polygons {
        let corners = polygon_corners(polygon)?;
        draw_polygon_outline(&mut canvas, &corners);
    }

    canvas
        .save(output_path)
        .with_context(|| format!("failed to save {}", output_path.display()))?;
    Ok(output_path.to_path_buf())
}

fn polygon_corners(polygon: &[PolygonPoint]) -> Result<[PolygonPoint; 4]> {
    <[PolygonPoint; 4]>::try_from(polygon)
        .map_err(|_| anyhow!("bounding polygon has {} points, expected 4", polygon.len()))
}

/// Closed outline through the four corners in the order the service returned
/// them, stroked at a fixed width.
fn draw_polygon_outline(canvas: &mut RgbImage, corners: &[PolygonPoint; 4]) {
    for index in 0..corners.len() {
        let start = corners[index];
        let end = corners[(index + 1) % corners.len()];
        draw_thick_segment(canvas, start, end, STROKE_WIDTH, OUTLINE_COLOR);
    }
}

fn draw_thick_segment(
    canvas: &mut RgbImage,
    start: PolygonPoint,
    end: PolygonPoint,
    width: f32,
    color: Rgb<u8>,
) {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length < f32::EPSILON {
        return;
    }

    // Quad spanning the segment, offset by half the stroke width on each side.
    let half = width / 2.0;
    let nx = -dy / length * half;
    let ny = dx / length * half;
    let quad = [
        Point::new((start.x + nx).round() as i32, (start.y + ny).round() as i32),
        Point::new((end.x + nx).round() as i32, (end.y + ny).round() as i32),
        Point::new((end.x - nx).round() as i32, (end.y - ny).round() as i32),
        Point::new((start.x - nx).round() as i32, (start.y - ny).round() as i32),
    ];

    let mut deduped: Vec<Point<i32>> = Vec::with_capacity(quad.len());
    for point in quad {
        if deduped.last() != Some(&point) {
            deduped.push(point);
        }
    }
    if deduped.len() > 1 && deduped.first() == deduped.last() {
        deduped.pop();
    }
    if deduped.len() < 3 {
        // Too short for a quad after rounding; a plain segment is close enough.
        draw_line_segment_mut(canvas, (start.x, start.y), (end.x, end.y), color);
        return;
    }
    draw_polygon_mut(canvas, &deduped, color);
}
