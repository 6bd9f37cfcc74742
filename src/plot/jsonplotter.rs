use std::io::Write;

use serde_json::json;

use crate::plot::plot::{
    FunctionPlot,
    PlotError,
    Plotter
};

/// Writes one JSON object per plot, one per line.
/// Non-finite samples come out as `null`.
pub struct JsonPlotter<W: Write> {
    writer: W
}

impl<W: Write> JsonPlotter<W> {
    pub fn new(writer: W) -> JsonPlotter<W> {
        JsonPlotter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Plotter for JsonPlotter<W> {
    fn render(&mut self, plot: &FunctionPlot) -> Result<(), PlotError> {
        let points: Vec<[f64; 2]> = plot
            .points()
            .iter()
            .map(|pt| [pt.x(), pt.y()])
            .collect();
        let value = json!({
            "title": plot.title(),
            "points": points
        });
        serde_json::to_writer(&mut self.writer, &value)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PlotError> {
        self.writer.flush()?;
        Ok(())
    }
}
