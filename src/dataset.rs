use std::{fs::File, io::Read, path::Path};

use csv::ReaderBuilder;
use log::debug;
use ndarray::Array2;

use crate::{AnnErr, Result};

/// A tabular dataset split into row aligned input and target matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Array2<f64>,
    targets: Array2<f64>,
}

impl Dataset {
    /// Creates a new `Dataset` from already built matrices.
    ///
    /// # Errors
    /// `AnnErr::Shape` if the matrices don't have the same amount of rows.
    pub fn new(inputs: Array2<f64>, targets: Array2<f64>) -> Result<Self> {
        if inputs.nrows() != targets.nrows() {
            return Err(AnnErr::Shape {
                what: "target rows",
                got: targets.nrows(),
                expected: inputs.nrows(),
            });
        }

        Ok(Self { inputs, targets })
    }

    /// Loads a comma separated file with a header row.
    ///
    /// # Arguments
    /// * `path` - The file to read.
    /// * `split` - The column index where targets start, every column before it is an input.
    /// * `input_len` - The expected amount of input columns.
    /// * `output_len` - The expected amount of target columns.
    ///
    /// # Errors
    /// `AnnErr::Io` if the file can't be read, `AnnErr::Format` if a row's width differs from
    /// the header's or a field is not a number and `AnnErr::Shape` if the columns don't split
    /// into the expected widths.
    pub fn from_csv<P: AsRef<Path>>(
        path: P,
        split: usize,
        input_len: usize,
        output_len: usize,
    ) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading dataset from {}", path.display());

        let file = File::open(path)?;
        Self::from_reader(file, split, input_len, output_len)
    }

    /// Same as [`Dataset::from_csv`] but reads from any source.
    pub fn from_reader<R: Read>(
        rdr: R,
        split: usize,
        input_len: usize,
        output_len: usize,
    ) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(rdr);

        let width = rdr.headers()?.len();
        if split != input_len {
            return Err(AnnErr::Shape {
                what: "input columns",
                got: split,
                expected: input_len,
            });
        }
        if width != input_len + output_len {
            return Err(AnnErr::Shape {
                what: "dataset columns",
                got: width,
                expected: input_len + output_len,
            });
        }

        let mut inputs = Vec::new();
        let mut targets = Vec::new();
        let mut rows = 0;

        for record in rdr.records() {
            let record = record?;
            rows += 1;

            for (col, field) in record.iter().enumerate() {
                let value: f64 = field.parse().map_err(|e| {
                    AnnErr::Format(format!(
                        "row {rows}, column {col}: {field:?} is not a number ({e})"
                    ))
                })?;

                if col < split {
                    inputs.push(value);
                } else {
                    targets.push(value);
                }
            }
        }

        debug!("loaded {rows} samples");

        let inputs = Array2::from_shape_vec((rows, input_len), inputs)
            .map_err(|e| AnnErr::Format(e.to_string()))?;
        let targets = Array2::from_shape_vec((rows, output_len), targets)
            .map_err(|e| AnnErr::Format(e.to_string()))?;

        Ok(Self { inputs, targets })
    }

    /// Returns the input matrix, one row per sample.
    pub fn inputs(&self) -> &Array2<f64> {
        &self.inputs
    }

    /// Returns the one-hot target matrix, one row per sample.
    pub fn targets(&self) -> &Array2<f64> {
        &self.targets
    }

    /// Returns the amount of samples.
    pub fn len(&self) -> usize {
        self.inputs.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the dataset giving back the input and target matrices.
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>) {
        (self.inputs, self.targets)
    }
}
