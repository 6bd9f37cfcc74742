use thiserror::Error;

use crate::math::function::integrand::Integrand;

pub const DEFAULT_PLOT_SAMPLES: usize = 400;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("a plot needs at least 2 samples, got {0}")]
    TooFewSamples(usize),
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Integrand sampled on an evenly spaced grid that includes both bounds.
pub struct FunctionPlot {
    title: String,
    points: Vec<Point2D>
}

impl FunctionPlot {
    pub fn sample(integrand: &dyn Integrand,
                  lower_bound: f64,
                  upper_bound: f64,
                  samples: usize) -> Result<FunctionPlot, PlotError> {
        if samples < 2 {
            return Err(PlotError::TooFewSamples(samples));
        }
        let step = (upper_bound - lower_bound) / (samples - 1) as f64;
        let points = (0..samples)
            .map(|i| {
                let x = if i == samples - 1 { upper_bound } else { lower_bound + i as f64 * step };
                Point2D::new(x, integrand.value(x))
            })
            .collect();
        Ok(FunctionPlot { title: integrand.formula(), points })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }
}

pub trait Plotter {
    fn render(&mut self, plot: &FunctionPlot) -> Result<(), PlotError>;

    fn flush(&mut self) -> Result<(), PlotError> {
        Ok(())
    }
}

/// Discards every plot.
pub struct NullPlotter;

impl Plotter for NullPlotter {
    fn render(&mut self, _plot: &FunctionPlot) -> Result<(), PlotError> {
        Ok(())
    }
}
