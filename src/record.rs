use crate::error::{Error, Result};

/// One line of a heuristic run: the schedule's makespan and its deviation
/// from the reference.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Record {
    pub makespan: i64,
    pub error_value: f64,
}

impl Record {
    /// Error value as a percentage of the makespan.
    pub fn relative_error(&self) -> f64 {
        (self.error_value * 100.0) / self.makespan as f64
    }
}

/// Turns a locale-formatted decimal (`12,7`) into one `f64::from_str` accepts.
pub fn normalize_decimal(token: &str) -> String {
    token.replace(',', ".").trim().to_owned()
}

/// Parses a `<makespan> <error>` line. Blank lines yield `None`.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Record>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Ok(None);
    }
    if parts.len() != 2 {
        return Err(Error::Format {
            line: line_no,
            content: line.to_owned(),
        });
    }

    let makespan: i64 = parts[0].parse().map_err(|e| Error::Parse {
        line: line_no,
        token: parts[0].to_owned(),
        reason: format!("{}", e),
    })?;

    let normalized = normalize_decimal(parts[1]);
    let error_value: f64 = normalized.parse().map_err(|e| Error::Parse {
        line: line_no,
        token: parts[1].to_owned(),
        reason: format!("{}", e),
    })?;
    if makespan == 0 {
        return Err(Error::DivisionByZero { line: line_no });
    }

    Ok(Some(Record {
        makespan,
        error_value,
    }))
}
