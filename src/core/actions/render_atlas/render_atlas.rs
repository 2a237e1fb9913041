use thiserror::Error;

use crate::core::actions::render_atlas::ports::colour_map::ColourMap;
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::data::atlas::ResultAtlas;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

const TARGET_TICK_INTERVALS: f64 = 5.0;
const MAX_TICKS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderAtlasError {
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Evenly spaced "round" values (1, 2, 2.5 or 5 × 10ᵏ apart) within
/// `[lower, upper]`.
pub fn nice_ticks(lower: f64, upper: f64) -> Vec<f64> {
    let raw_step = (upper - lower) / TARGET_TICK_INTERVALS;

    if !raw_step.is_finite() || raw_step <= 0.0 {
        return Vec::new();
    }

    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let multiplier = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&m| m >= normalized)
        .unwrap_or(10.0);
    let step = multiplier * magnitude;
    let first = (lower / step).ceil() * step;
    let tolerance = step * 1e-9;

    (0..MAX_TICKS)
        .map(|k| first + k as f64 * step)
        .take_while(|&tick| tick <= upper + tolerance)
        .collect()
}

fn tick_to_index(tick: f64, lower: f64, span: f64, last_index: usize) -> usize {
    let index = ((tick - lower) / span * last_index as f64).round();
    (index.max(0.0) as usize).min(last_index)
}

fn draw_grid(atlas: &ResultAtlas, pixels: &mut PixelBuffer) -> Result<(), PixelBufferError> {
    let region = atlas.region();
    let last = atlas.density() - 1;

    for tick in nice_ticks(region.x_min(), region.x_max()) {
        let x = tick_to_index(tick, region.x_min(), region.width(), last);
        for y in 0..=last {
            pixels.set_pixel(x, y, Colour::WHITE)?;
        }
    }

    for tick in nice_ticks(region.y_min(), region.y_max()) {
        let y = last - tick_to_index(tick, region.y_min(), region.height(), last);
        for x in 0..=last {
            pixels.set_pixel(x, y, Colour::WHITE)?;
        }
    }

    Ok(())
}

/// Maps every count of `atlas` through `colour_map` into a square RGB raster.
///
/// Image columns follow the real axis left to right. Rows are flipped so the
/// imaginary lower bound sits on the bottom edge. With `show_grid`, white
/// lines are drawn at [`nice_ticks`] positions on both axes.
pub fn render_atlas<CMap: ColourMap<u32>>(
    atlas: &ResultAtlas,
    colour_map: &CMap,
    show_grid: bool,
) -> Result<PixelBuffer, RenderAtlasError> {
    let density = atlas.density();
    let mut buffer: PixelBufferData = vec![0; density * density * 3];

    for (i, row) in atlas.rows().enumerate() {
        for (j, &count) in row.iter().enumerate() {
            let Colour { r, g, b } = colour_map.map(count)?;
            let y = density - 1 - j;
            let index = (y * density + i) * 3;

            buffer[index] = r;
            buffer[index + 1] = g;
            buffer[index + 2] = b;
        }
    }

    let mut pixels = PixelBuffer::from_data(density, density, buffer)?;

    if show_grid && density > 1 {
        draw_grid(atlas, &mut pixels)?;
    }

    Ok(pixels)
}
