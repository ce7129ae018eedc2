use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

use crate::errors::FilterError;
use crate::filter::Filter;
use crate::records::{Domain, Record};

// @module: Pipeline driver for JSON-lines record streams

/// Drives a filter over a stream of records of one domain
#[derive(Debug)]
pub struct Controller<F: Filter> {
    // @field: Filter applied to every record
    filter: F,
    // @field: Domain of the incoming records
    domain: Domain,
}

impl<F: Filter> Controller<F> {
    // @method: Create a controller, rejecting domains the filter cannot handle
    pub fn new(filter: F, domain: Domain) -> Result<Self> {
        if !filter.accepts(domain) {
            let supported: Vec<&str> = filter.domains().iter().map(Domain::as_str).collect();
            return Err(FilterError::UnsupportedRecord(format!(
                "'{}' records (filter '{}' supports: {})",
                domain,
                filter.name(),
                supported.join(", ")
            ))
            .into());
        }
        Ok(Self { filter, domain })
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Run the filter over every JSON line of `reader`, writing results to `writer`
    ///
    /// Records are processed one at a time in input order. The first error
    /// aborts the run without finalizing the filter.
    ///
    /// # Returns
    /// * `Result<usize>` - Number of records written
    pub async fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<usize> {
        let start_time = std::time::Instant::now();

        self.filter
            .initialize()
            .await
            .with_context(|| format!("Failed to initialize filter '{}'", self.filter.name()))?;

        let mut read = 0usize;
        let mut written = 0usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
            if line.trim().is_empty() {
                continue;
            }
            read += 1;

            let record = Record::from_json_line(self.domain, &line)
                .with_context(|| format!("Failed to decode record on line {}", index + 1))?;

            let processed = self
                .filter
                .process(&record)
                .await
                .with_context(|| format!("Failed to process record on line {}", index + 1))?;

            match processed {
                Some(output) => {
                    writeln!(writer, "{}", output.to_json_line()?).context("Failed to write record")?;
                    written += 1;
                }
                None => debug!("Record on line {} dropped", index + 1),
            }
        }
        writer.flush().context("Failed to flush output")?;

        self.filter.finalize();
        info!(
            "Processed {} record(s), wrote {} in {:.2}s",
            read,
            written,
            start_time.elapsed().as_secs_f64()
        );

        Ok(written)
    }
}
