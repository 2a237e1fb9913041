use crate::core::actions::render_atlas::ports::colour_map::ColourMap;
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::data::colour::Colour;

// (position, intensity) anchors of the classic "jet" scale
const RED: &[(f64, f64)] = &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)];
const GREEN: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const BLUE: &[(f64, f64)] = &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)];

fn interpolate(anchors: &[(f64, f64)], t: f64) -> f64 {
    for pair in anchors.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];

        if t <= x1 {
            return y0 + (t - x0) / (x1 - x0) * (y1 - y0);
        }
    }

    anchors[anchors.len() - 1].1
}

fn channel(anchors: &[(f64, f64)], t: f64) -> u8 {
    (interpolate(anchors, t) * 255.0).round() as u8
}

/// Piecewise-linear blue → cyan → yellow → red scale over `[0, max_count]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct JetColourMap {
    max_count: u32,
}

impl ColourMap<u32> for JetColourMap {
    fn map(&self, count: u32) -> Result<Colour, ColourMapError> {
        if count > self.max_count {
            return Err(ColourMapError::CountExceedsMax {
                count,
                max_count: self.max_count,
            });
        }

        let t = if self.max_count == 0 {
            0.0
        } else {
            f64::from(count) / f64::from(self.max_count)
        };

        Ok(Colour {
            r: channel(RED, t),
            g: channel(GREEN, t),
            b: channel(BLUE, t),
        })
    }

    fn display_name(&self) -> &str {
        "Jet"
    }
}

impl JetColourMap {
    #[must_use]
    pub fn new(max_count: u32) -> Self {
        Self { max_count }
    }
}
