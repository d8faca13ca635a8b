use crate::application::pipeline::PredictionResult;
use crate::domain::features::FeatureSelection;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ResultRow<'a> {
    years: u32,
    age: u32,
    performance: u8,
    department: &'a str,
    annual: &'a str,
    monthly: &'a str,
    band: &'a str,
}

/// Writes prediction results as CSV, one row per selection.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, selection: &FeatureSelection, result: &PredictionResult) -> Result<()> {
        self.writer.serialize(ResultRow {
            years: selection.years,
            age: selection.age,
            performance: selection.performance,
            department: &selection.department,
            annual: &result.annual_display,
            monthly: &result.monthly_display,
            band: result.band.label(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
