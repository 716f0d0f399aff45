use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::record::{self, Record};

/// Reads `path` and returns the mean relative error percentage of its records.
pub fn compute_mean_relative_error<P: AsRef<Path>>(path: P) -> Result<f64> {
    let mut aggregator = ErrorAggregator::new();
    aggregator.process(path)?.mean()
}

/// Computes the mean for `path` and writes it to `output`, newline terminated.
pub fn process_file<P: AsRef<Path>>(path: P, output: &mut dyn Write) -> Result<()> {
    let mean = compute_mean_relative_error(path)?;
    writeln!(output, "{}", format_mean(mean))?;
    Ok(())
}

/// Shortest round-trip form with a fractional part (`10.0`, not `10`) and a
/// signed two-digit exponent (`1e-05`, `1.5e+16`), as the experiment scripts print.
pub fn format_mean(mean: f64) -> String {
    if mean.is_nan() {
        return "nan".to_owned();
    }
    let repr = format!("{:?}", mean);
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// Running sum and count of per-record relative errors.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct ErrorAggregator {
    sum: f64,
    count: usize,
}

impl ErrorAggregator {
    pub fn new() -> Self {
        ErrorAggregator { sum: 0.0, count: 0 }
    }

    pub fn process<P: AsRef<Path>>(&mut self, path: P) -> Result<&Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!("reading {}", path.display());
        self.process_reader(io::BufReader::new(file))
    }

    pub fn process_reader<R: BufRead>(&mut self, reader: R) -> Result<&Self> {
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            self.add_line(i + 1, &line)?;
        }
        info!("{} records, mean relative error {:?}", self.count, self.mean_or_nan());
        Ok(self)
    }

    /// Parses and adds one line; blank lines are ignored.
    pub fn add_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        if let Some(record) = record::parse_line(line_no, line)? {
            debug!(
                "line {}: makespan={} error={} relative={}",
                line_no,
                record.makespan,
                record.error_value,
                record.relative_error()
            );
            self.add(&record);
        }
        Ok(())
    }

    pub fn add(&mut self, record: &Record) {
        self.sum += record.relative_error();
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> Result<f64> {
        if self.count == 0 {
            return Err(Error::EmptyInput);
        }
        Ok(self.sum / self.count as f64)
    }

    fn mean_or_nan(&self) -> f64 {
        self.mean().unwrap_or(f64::NAN)
    }
}
