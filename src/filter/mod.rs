/*!
 * Pipeline filters.
 *
 * A filter is driven through `initialize`, then `process` once per record in
 * pipeline order, then `finalize` exactly once. `process` receives a borrowed
 * record and hands back an owned one, so the caller's value is never touched.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::FilterError;
use crate::records::{Domain, Record};

/// Lifecycle every pipeline filter implements
#[async_trait]
pub trait Filter: Send + Debug {
    /// Name of the filter, used as sub-command
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Domains of records the filter accepts and generates
    fn domains(&self) -> &'static [Domain];

    /// Whether records of the given domain can be processed
    fn accepts(&self, domain: Domain) -> bool {
        self.domains().contains(&domain)
    }

    /// Prepare for processing; fails on incomplete configuration
    async fn initialize(&mut self) -> Result<(), FilterError>;

    /// Process one record
    ///
    /// # Returns
    /// * `Ok(Some(record))` - The (potentially updated) copy of the record
    /// * `Ok(None)` - The record is dropped
    async fn process(&mut self, record: &Record) -> Result<Option<Record>, FilterError>;

    /// Finish processing and report
    fn finalize(&mut self);
}

pub mod google_translate;
