use crate::domain::features::FeatureSelection;
use crate::error::{EstimatorError, Result};
use std::io::Read;

/// Reads form selections from CSV with a `years,age,performance,department`
/// header.
///
/// Each row is deserialized and range-checked; a bad row yields an error
/// item and reading continues with the next one.
pub struct SelectionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SelectionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields selections in file order.
    pub fn selections(self) -> impl Iterator<Item = Result<FeatureSelection>> {
        self.reader.into_deserialize().map(|result| -> Result<FeatureSelection> {
            let selection: FeatureSelection = result.map_err(EstimatorError::from)?;
            selection.validate()?;
            Ok(selection)
        })
    }
}
