/*!
 * Record types flowing through the pipeline.
 *
 * A record is one of three closed variants; the filter branches over them
 * with an exhaustive match. Records travel as JSON lines, one object per line,
 * with the domain of the stream declared up front.
 */

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::RecordError;

/// Instruction/input/output triple used for supervised fine-tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairData {
    pub instruction: String,
    pub input: String,
    pub output: String,
}

/// Free text used for pretraining
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PretrainData {
    pub content: String,
}

/// The same text in several languages, keyed by language code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TranslationData {
    pub translations: BTreeMap<String, String>,
}

/// A single pipeline record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Pair(PairData),
    Pretrain(PretrainData),
    Translation(TranslationData),
}

/// Kind of records a stream carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Pairs,
    Pretrain,
    Translation,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pairs => "pairs",
            Self::Pretrain => "pretrain",
            Self::Translation => "translation",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Domain {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "pairs" | "pair" => Ok(Self::Pairs),
            "pretrain" => Ok(Self::Pretrain),
            "translation" => Ok(Self::Translation),
            _ => Err(anyhow::anyhow!("Invalid domain: {}", s)),
        }
    }
}

impl Record {
    /// Domain this record belongs to
    pub fn domain(&self) -> Domain {
        match self {
            Self::Pair(_) => Domain::Pairs,
            Self::Pretrain(_) => Domain::Pretrain,
            Self::Translation(_) => Domain::Translation,
        }
    }

    /// Decode one JSON line as a record of the given domain
    pub fn from_json_line(domain: Domain, line: &str) -> Result<Self, RecordError> {
        let value: serde_json::Value = serde_json::from_str(line)?;
        if !value.is_object() {
            return Err(RecordError::Unsupported {
                domain: domain.to_string(),
                reason: "expected a JSON object".to_string(),
            });
        }

        match domain {
            Domain::Pairs => decode_as(domain, value).map(Self::Pair),
            Domain::Pretrain => decode_as(domain, value).map(Self::Pretrain),
            Domain::Translation => decode_as(domain, value).map(Self::Translation),
        }
    }

    /// Encode the record as a single JSON line (no trailing newline)
    pub fn to_json_line(&self) -> Result<String, RecordError> {
        let line = match self {
            Self::Pair(data) => serde_json::to_string(data)?,
            Self::Pretrain(data) => serde_json::to_string(data)?,
            Self::Translation(data) => serde_json::to_string(data)?,
        };
        Ok(line)
    }
}

fn decode_as<T: DeserializeOwned>(domain: Domain, value: serde_json::Value) -> Result<T, RecordError> {
    serde_json::from_value(value).map_err(|e| RecordError::Unsupported {
        domain: domain.to_string(),
        reason: e.to_string(),
    })
}
