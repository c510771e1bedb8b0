//! Delimited text loader
//!
//! Supports files where:
//! - Each row is one sample and there is no header row
//! - The last column is the label (any string)
//! - All other columns are floating-point features
//! - Fields may be wrapped in a quote character (`|` by default); a doubled
//!   quote inside a quoted field stands for a literal quote
//! - Blank lines and lines starting with `#` are skipped

use crate::core::{GeometryError, LabeledPoints, Result};
use log::info;
use ndarray::Array2;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a comma-separated file with the default format
pub fn load<P: AsRef<Path>>(path: P) -> Result<LabeledPoints> {
    CsvFormat::default().read_file(path)
}

/// Field delimiter and quote character of a delimited file
#[derive(Debug, Clone, PartialEq)]
pub struct CsvFormat {
    pub delimiter: char,
    pub quote: Option<char>,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: Some('|'),
        }
    }
}

impl CsvFormat {
    /// Comma-separated, `|`-quoted
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character, or `None` to disable quoting
    pub fn with_quote(mut self, quote: Option<char>) -> Self {
        self.quote = quote;
        self
    }

    /// Load a labeled collection from a file
    ///
    /// A file that cannot be opened is reported as a `ParseError` at line 0.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<LabeledPoints> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| GeometryError::ParseError {
            line: 0,
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        self.read_reader(BufReader::new(file))
    }

    /// Load a labeled collection from a reader
    pub fn read_reader<R: BufRead>(&self, reader: R) -> Result<LabeledPoints> {
        let mut values = Vec::new();
        let mut labels = Vec::new();
        let mut width: Option<usize> = None;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| GeometryError::ParseError {
                line: line_number,
                message: format!("unreadable line: {e}"),
            })?;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut fields = self.split_fields(&line, line_number)?;
            if fields.len() < 2 {
                return Err(GeometryError::ParseError {
                    line: line_number,
                    message: format!("expected features and a label, found {} field", fields.len()),
                });
            }

            match width {
                None => width = Some(fields.len()),
                Some(expected) if expected != fields.len() => {
                    return Err(GeometryError::ParseError {
                        line: line_number,
                        message: format!("expected {} fields, found {}", expected, fields.len()),
                    });
                }
                Some(_) => {}
            }

            // Checked above: at least two fields
            let label = fields.pop().unwrap_or_default();

            for (column, field) in fields.iter().enumerate() {
                let value = field.trim().parse::<f64>().map_err(|_| GeometryError::ParseError {
                    line: line_number,
                    message: format!("invalid feature value at column {}: {:?}", column + 1, field),
                })?;
                values.push(value);
            }
            labels.push(label);
        }

        let n_features = match width {
            Some(width) => width - 1,
            None => return Err(GeometryError::EmptyDataset),
        };

        let features = Array2::from_shape_vec((labels.len(), n_features), values)?;
        info!(
            "Loaded {} samples with {} features",
            features.nrows(),
            features.ncols()
        );

        LabeledPoints::new(features, labels)
    }

    /// Split one line into fields, honoring the quote character
    fn split_fields(&self, line: &str, line_number: usize) -> Result<Vec<String>> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut at_field_start = true;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            if in_quotes {
                if Some(c) == self.quote {
                    if chars.peek() == Some(&c) {
                        field.push(c);
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(c);
                }
            } else if c == self.delimiter {
                fields.push(std::mem::take(&mut field));
                at_field_start = true;
                continue;
            } else if at_field_start && Some(c) == self.quote {
                in_quotes = true;
            } else {
                field.push(c);
            }
            at_field_start = false;
        }

        if in_quotes {
            return Err(GeometryError::ParseError {
                line: line_number,
                message: "unterminated quoted field".to_string(),
            });
        }

        fields.push(field);
        Ok(fields)
    }
}
