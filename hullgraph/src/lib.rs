// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Comparison charts for benchmark series: one line per series, optional
//! symmetric error bars, linear or logarithmic axes, rendered to PNG.

use plotters::coord::ranged1d::{AsRangedCoord, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;

use std::error::Error;
use std::ops::Range;
use std::path::Path;

mod scales;

pub use scales::*;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            (($colour & 0x0000FF) >> 0) as u8,
        )
    };
}

const COLOURS: &[RGBColor] = &[
    hexcolour!(0x1F77B4),
    hexcolour!(0xFF7F0E),
    hexcolour!(0x2CA02C),
    hexcolour!(0xD62728),
    hexcolour!(0x9467BD),
    hexcolour!(0x8C564B),
    hexcolour!(0xE377C2),
    hexcolour!(0x7F7F7F),
    hexcolour!(0xBCBD22),
    hexcolour!(0x17BECF),
];

const FONT: &str = "sans-serif";

/// Typographic points per inch.
const POINTS_PER_INCH: f64 = 72.0;

/// Shape drawn at each data point of a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
}

/// A single data point. `yerr` is the half-length of a symmetric error bar,
/// `None` when no bar should be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub yerr: Option<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, yerr: None }
    }

    pub fn with_error(x: f64, y: f64, yerr: Option<f64>) -> Self {
        Self { x, y, yerr }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub marker: Marker,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(label: impl AsRef<str>, marker: Marker) -> Self {
        Self {
            label: label.as_ref().to_owned(),
            marker,
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }
}

pub struct PlotConfig {
    caption: String,
    x_desc: String,
    y_desc: String,
    // figure size in inches
    size: (f64, f64),
    dpi: u32,
    x_scale: Scale,
    y_scale: Scale,
    error_bars: bool,
    minor_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self {
            caption: String::new(),
            x_desc: String::new(),
            y_desc: String::new(),
            size: (10.0, 6.0),
            dpi: 100,
            x_scale: Scale::Linear,
            y_scale: Scale::Linear,
            error_bars: false,
            minor_grid: false,
        }
    }

    pub fn caption(&mut self, caption: impl AsRef<str>) -> &mut Self {
        self.caption = caption.as_ref().to_owned();
        self
    }

    pub fn x_desc(&mut self, x_desc: impl AsRef<str>) -> &mut Self {
        self.x_desc = x_desc.as_ref().to_owned();
        self
    }

    pub fn y_desc(&mut self, y_desc: impl AsRef<str>) -> &mut Self {
        self.y_desc = y_desc.as_ref().to_owned();
        self
    }

    /// Figure size in inches.
    pub fn size(&mut self, width: f64, height: f64) -> &mut Self {
        self.size = (width, height);
        self
    }

    pub fn dpi(&mut self, dpi: u32) -> &mut Self {
        self.dpi = dpi;
        self
    }

    pub fn x_scale(&mut self, scale: Scale) -> &mut Self {
        self.x_scale = scale;
        self
    }

    pub fn y_scale(&mut self, scale: Scale) -> &mut Self {
        self.y_scale = scale;
        self
    }

    pub fn error_bars(&mut self, enabled: bool) -> &mut Self {
        self.error_bars = enabled;
        self
    }

    /// Draw grid lines on minor ticks as well as major ones.
    pub fn minor_grid(&mut self, enabled: bool) -> &mut Self {
        self.minor_grid = enabled;
        self
    }

    /// Output image dimensions in pixels.
    pub fn pixels(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.size.0 * dpi).round() as u32,
            (self.size.1 * dpi).round() as u32,
        )
    }

    /// Converts a length in typographic points to pixels at this DPI.
    fn px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / POINTS_PER_INCH
    }

    /// Legend swatch length and the width reserved for it before the label.
    fn legend_swatch(&self) -> (i32, u32) {
        (self.px(20.0).round() as i32, self.px(30.0).round() as u32)
    }

    /// Returns a copy of `series` holding only the points that can be placed
    /// on this chart's axes.
    pub fn visible(&self, series: &Series) -> Series {
        let points = series
            .points
            .iter()
            .filter(|p| self.x_scale.admits(p.x) && self.y_scale.admits(p.y))
            .copied()
            .collect();

        Series {
            label: series.label.clone(),
            marker: series.marker,
            points,
        }
    }

    fn x_range(&self, series: &[Series]) -> Range<f64> {
        self.x_scale
            .range(series.iter().flat_map(|s| s.points.iter().map(|p| p.x)))
    }

    fn y_range(&self, series: &[Series]) -> Range<f64> {
        let error_bars = self.error_bars;
        self.y_scale.range(series.iter().flat_map(|s| {
            s.points.iter().flat_map(move |p| {
                let err = if error_bars { p.yerr } else { None };
                let (lo, hi) = match err {
                    Some(e) if e.is_finite() => (p.y - e, p.y + e),
                    _ => (p.y, p.y),
                };
                vec![lo, p.y, hi]
            })
        }))
    }

    /// Render `series` to a PNG at `filename`, replacing any existing file.
    pub fn plot(&self, filename: impl AsRef<Path>, series: &[Series]) -> Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(filename.as_ref(), self.pixels()).into_drawing_area();
        self.render(&root, series)?;
        root.present()?;

        Ok(())
    }

    /// Render `series` into an RGB buffer of `pixels()` dimensions.
    pub fn plot_to_buffer(&self, buffer: &mut [u8], series: &[Series]) -> Result<(), Box<dyn Error>> {
        let root = BitMapBackend::with_buffer(buffer, self.pixels()).into_drawing_area();
        self.render(&root, series)?;
        root.present()?;

        Ok(())
    }

    fn render(
        &self,
        root: &DrawingArea<BitMapBackend, Shift>,
        series: &[Series],
    ) -> Result<(), Box<dyn Error>> {
        let series: Vec<Series> = series.iter().map(|s| self.visible(s)).collect();

        root.fill(&WHITE)?;

        let x = self.x_range(&series);
        let y = self.y_range(&series);
        let floor = y.start;

        match (self.x_scale, self.y_scale) {
            (Scale::Linear, Scale::Linear) => self.draw(root, x, y, floor, &series),
            (Scale::Linear, Scale::Log) => self.draw(root, x, y.log_scale(), floor, &series),
            (Scale::Log, Scale::Linear) => self.draw(root, x.log_scale(), y, floor, &series),
            (Scale::Log, Scale::Log) => self.draw(root, x.log_scale(), y.log_scale(), floor, &series),
        }
    }

    fn draw<X, Y>(
        &self,
        root: &DrawingArea<BitMapBackend, Shift>,
        x_axis: X,
        y_axis: Y,
        floor: f64,
        series: &[Series],
    ) -> Result<(), Box<dyn Error>>
    where
        X: AsRangedCoord<Value = f64>,
        Y: AsRangedCoord<Value = f64>,
        X::CoordDescType: ValueFormatter<f64>,
        Y::CoordDescType: ValueFormatter<f64>,
    {
        let mut chart = ChartBuilder::on(root)
            .caption(&self.caption, (FONT, self.px(14.0)).into_font())
            .margin(self.px(10.0) as u32)
            .margin_right(self.px(28.0) as u32)
            .x_label_area_size(self.px(36.0) as u32)
            .y_label_area_size(self.px(64.0) as u32)
            .build_cartesian_2d(x_axis, y_axis)?;

        let light = if self.minor_grid {
            BLACK.mix(0.12)
        } else {
            TRANSPARENT
        };

        chart
            .configure_mesh()
            .x_desc(&self.x_desc)
            .y_desc(&self.y_desc)
            .label_style((FONT, self.px(10.0)).into_font())
            .axis_desc_style((FONT, self.px(11.0)).into_font())
            .x_label_formatter(&|v| tick_label(*v))
            .y_label_formatter(&|v| tick_label(*v))
            .bold_line_style(BLACK.mix(0.3))
            .light_line_style(light)
            .draw()?;

        let stroke = self.px(1.5).round().max(1.0) as u32;
        let radius = self.px(3.0).round() as i32;
        // half width of an error bar cap
        let cap = self.px(5.0).round() as i32;
        let (legend_len, legend_area) = self.legend_swatch();

        for (i, series) in series.iter().enumerate() {
            let colour = COLOURS[i % COLOURS.len()];
            let style = colour.stroke_width(stroke);

            let line = chart.draw_series(LineSeries::new(
                series.points.iter().map(|p| (p.x, p.y)),
                style,
            ))?;
            if !series.label.is_empty() {
                line.label(&series.label).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + legend_len, y)], style)
                });
            }

            // plain paths: plotters' ErrorBar rings the mean and would hide the marker
            if self.error_bars {
                for p in &series.points {
                    let err = match p.yerr.filter(|e| e.is_finite()) {
                        Some(err) => err,
                        None => continue,
                    };
                    let lo = (p.y - err).max(floor);
                    let hi = p.y + err;
                    chart.draw_series(
                        [lo, hi]
                            .iter()
                            .map(|&end| {
                                EmptyElement::at((p.x, end))
                                    + PathElement::new(vec![(-cap, 0), (cap, 0)], style)
                            }),
                    )?;
                    chart.draw_series(std::iter::once(PathElement::new(
                        vec![(p.x, lo), (p.x, hi)],
                        style,
                    )))?;
                }
            }

            let points = series.points.iter().map(|p| (p.x, p.y));
            match series.marker {
                Marker::Circle => {
                    chart.draw_series(points.map(|c| Circle::new(c, radius, colour.filled())))?;
                }
                Marker::Square => {
                    chart.draw_series(points.map(|c| {
                        EmptyElement::at(c)
                            + Rectangle::new([(-radius, -radius), (radius, radius)], colour.filled())
                    }))?;
                }
                Marker::Triangle => {
                    chart.draw_series(
                        points.map(|c| TriangleMarker::new(c, radius + 1, colour.filled())),
                    )?;
                }
            }
        }

        if series.iter().any(|s| !s.label.is_empty()) {
            chart
                .configure_series_labels()
                .legend_area_size(legend_area)
                .label_font((FONT, self.px(10.0)).into_font())
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .position(SeriesLabelPosition::UpperLeft)
                .draw()?;
        }

        Ok(())
    }
}

/// Tick text: plain decimals for moderate magnitudes, exponent form otherwise.
fn tick_label(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && (magnitude >= 1e5 || magnitude < 1e-3) {
        return format!("{:e}", value);
    }
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}
