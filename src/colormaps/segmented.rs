//! Lookup-table colormaps built from piecewise-linear channel segments.
//!
//! Each channel is described by rows `(x, y0, y1)` with `x` ascending from 0
//! to 1. Between rows `i` and `i + 1` the channel runs linearly from `y1[i]` to
//! `y0[i + 1]`, so setting `y0 != y1` at a row produces a step. The segments
//! are sampled into a lookup table of `N` entries at construction and never
//! touched again.

use ndarray::{Array2, ArrayView2};

use super::colormap::{lut_index, Colormap, LutIndex, Rgba, BAD_COLOUR};
use crate::error::{CmapError, Result};
use crate::interpolation::{linspace, searchsorted_left};

/// One row of a channel's segment table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Position in `[0, 1]`
    pub x: f64,
    /// Channel value approached from the left
    pub y0: f64,
    /// Channel value leaving to the right
    pub y1: f64,
}

impl Segment {
    pub const fn new(x: f64, y0: f64, y1: f64) -> Self {
        Self { x, y0, y1 }
    }

    /// A row without a discontinuity
    pub const fn point(x: f64, y: f64) -> Self {
        Self { x, y0: y, y1: y }
    }
}

/// Per-channel segment tables. A missing alpha table means fully opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentData {
    pub red: Vec<Segment>,
    pub green: Vec<Segment>,
    pub blue: Vec<Segment>,
    pub alpha: Option<Vec<Segment>>,
}

impl SegmentData {
    /// Segment tables placing `colours` at the given positions
    pub fn from_stops(stops: &[(f64, Rgba)]) -> Self {
        let channel = |c: usize| -> Vec<Segment> {
            stops
                .iter()
                .map(|&(x, colour)| Segment::point(x, colour[c]))
                .collect()
        };
        Self {
            red: channel(0),
            green: channel(1),
            blue: channel(2),
            alpha: Some(channel(3)),
        }
    }
}

/// Colormap backed by a lookup table generated from [`SegmentData`]
#[derive(Debug, Clone)]
pub struct LinearSegmentedColormap {
    name: String,
    segments: SegmentData,
    lut: Array2<f64>,
}

impl LinearSegmentedColormap {
    /// Build a colormap with `n` lookup entries from channel segments
    pub fn new(name: impl Into<String>, segments: SegmentData, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(CmapError::InvalidParameter {
                param: "n".to_string(),
                message: "A colormap needs at least one lookup entry".to_string(),
            });
        }

        let mut lut = Array2::<f64>::ones((n, 4));
        let channels = [
            Some(&segments.red),
            Some(&segments.green),
            Some(&segments.blue),
            segments.alpha.as_ref(),
        ];
        for (c, channel) in channels.iter().enumerate() {
            if let Some(channel) = channel {
                validate_segments(channel)?;
                let values = create_lookup_table(n, channel);
                lut.column_mut(c)
                    .iter_mut()
                    .zip(values)
                    .for_each(|(slot, v)| *slot = v);
            }
        }

        Ok(Self {
            name: name.into(),
            segments,
            lut,
        })
    }

    /// Spread `colours` evenly over `[0, 1]` and interpolate between them.
    ///
    /// A single colour yields a constant map.
    pub fn from_list(name: impl Into<String>, colours: &[Rgba], n: usize) -> Result<Self> {
        match colours.len() {
            0 => Err(CmapError::InvalidParameter {
                param: "colours".to_string(),
                message: "At least one colour is required".to_string(),
            }),
            1 => Self::from_stops(name, &[(0.0, colours[0]), (1.0, colours[0])], n),
            len => {
                let positions = linspace(0.0, 1.0, len);
                let stops: Vec<(f64, Rgba)> =
                    positions.iter().copied().zip(colours.iter().copied()).collect();
                Self::from_stops(name, &stops, n)
            }
        }
    }

    /// Interpolate between colours placed at explicit positions
    pub fn from_stops(name: impl Into<String>, stops: &[(f64, Rgba)], n: usize) -> Result<Self> {
        Self::new(name, SegmentData::from_stops(stops), n)
    }

    /// The channel segments this map was built from
    pub fn segment_data(&self) -> &SegmentData {
        &self.segments
    }

    /// The `N x 4` lookup table
    pub fn lut(&self) -> ArrayView2<'_, f64> {
        self.lut.view()
    }

    fn entry(&self, i: usize) -> Rgba {
        let row = self.lut.row(i);
        [row[0], row[1], row[2], row[3]]
    }
}

impl Colormap for LinearSegmentedColormap {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolution(&self) -> usize {
        self.lut.nrows()
    }

    fn map_normalized(&self, t: f64) -> Rgba {
        match lut_index(t, self.lut.nrows()) {
            LutIndex::Bad => BAD_COLOUR,
            LutIndex::Under => self.entry(0),
            LutIndex::Over => self.entry(self.lut.nrows() - 1),
            LutIndex::Entry(i) => self.entry(i),
        }
    }
}

fn validate_segments(segments: &[Segment]) -> Result<()> {
    let (first, last) = match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(CmapError::InvalidParameter {
                param: "segmentdata".to_string(),
                message: "Channel segments must not be empty".to_string(),
            })
        }
    };

    if first.x != 0.0 || last.x != 1.0 {
        return Err(CmapError::InvalidParameter {
            param: "segmentdata".to_string(),
            message: "Segment positions must start at 0 and end at 1".to_string(),
        });
    }

    if segments.windows(2).any(|w| w[1].x < w[0].x) {
        return Err(CmapError::InvalidParameter {
            param: "segmentdata".to_string(),
            message: "Segment positions must be in increasing order".to_string(),
        });
    }

    Ok(())
}

/// Sample one channel's segments at `n` evenly spaced positions
fn create_lookup_table(n: usize, segments: &[Segment]) -> Vec<f64> {
    let last = segments.len() - 1;
    if n == 1 {
        return vec![segments[last].y0.clamp(0.0, 1.0)];
    }

    let scale = (n - 1) as f64;
    let xs: Vec<f64> = segments.iter().map(|s| s.x * scale).collect();

    let mut lut = Vec::with_capacity(n);
    lut.push(segments[0].y1);
    for i in 1..n - 1 {
        let position = i as f64;
        // xs[0] == 0 < position < xs[last], so 1 <= ind <= last
        let ind = searchsorted_left(&xs, position);
        let distance = (position - xs[ind - 1]) / (xs[ind] - xs[ind - 1]);
        lut.push(distance * (segments[ind].y0 - segments[ind - 1].y1) + segments[ind - 1].y1);
    }
    lut.push(segments[last].y0);

    lut.into_iter().map(|v| v.clamp(0.0, 1.0)).collect()
}
