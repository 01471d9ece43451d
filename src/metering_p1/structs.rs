use serde::Serialize;
use std::fmt;

use super::utils::{self, DEFAULT_MAX_LINES, LONG_DIALECT_MAX_LINES, SHORT_DIALECT_MAX_LINES};

/// Telegram family, told apart by the suffix of the `/ISk5` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dialect {
    /// Header ends in `1003`
    Short,
    /// Header ends in `1004`
    Long,
    Unknown,
}

impl Dialect {
    /// Returns `None` for lines that are no `/ISk5` header at all.
    pub fn from_header(line: &str) -> Option<Self> {
        if !utils::is_start_line(line) {
            return None;
        }

        if line.ends_with("1003") {
            Some(Dialect::Short)
        } else if line.ends_with("1004") {
            Some(Dialect::Long)
        } else {
            Some(Dialect::Unknown)
        }
    }

    pub fn expected_max_lines(&self) -> usize {
        match self {
            Dialect::Short => SHORT_DIALECT_MAX_LINES,
            Dialect::Long => LONG_DIALECT_MAX_LINES,
            Dialect::Unknown => DEFAULT_MAX_LINES,
        }
    }
}

/// One telegram as received, lines joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTelegram {
    text: String,
}

impl RawTelegram {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Number of lines, an empty telegram still counts as one empty line.
    pub fn len(&self) -> usize {
        self.lines().count()
    }
}

impl From<String> for RawTelegram {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for RawTelegram {
    fn from(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

impl<S: AsRef<str>> From<&[S]> for RawTelegram {
    fn from(lines: &[S]) -> Self {
        let lines: Vec<&str> = lines.iter().map(|l| l.as_ref()).collect();
        Self { text: lines.join("\n") }
    }
}

impl<S: AsRef<str>> From<Vec<S>> for RawTelegram {
    fn from(lines: Vec<S>) -> Self {
        Self::from(lines.as_slice())
    }
}

impl fmt::Display for RawTelegram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TariffReading {
    pub consumed_kwh: Option<f64>,
    pub produced_kwh: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElectricityData {
    pub equipment_id: Option<String>,
    pub tariff: Option<i64>,
    pub switch: Option<i64>,
    pub threshold_kw: Option<f64>,
    pub low: TariffReading,
    pub high: TariffReading,
    pub current_consumed_kw: Option<f64>,
    pub current_produced_kw: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GasData {
    pub equipment_id: Option<String>,
    pub device_type: Option<i64>,
    /// Zero when the telegram carries no gas reading
    pub total_m3: f64,
    pub valve: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageData {
    pub code: Option<String>,
    pub text: Option<String>,
}

/// Decoded telegram. Keeps the raw text it was decoded from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeteringRecord {
    pub header: String,
    pub electricity: ElectricityData,
    pub gas: GasData,
    pub message: MessageData,
    #[serde(skip)]
    pub(crate) raw: RawTelegram,
}

impl MeteringRecord {
    /// The exact text this record was decoded from.
    pub fn text(&self) -> &str {
        self.raw.as_str()
    }

    pub fn raw(&self) -> &RawTelegram {
        &self.raw
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Looks up a leaf by dotted path, e.g. `electricity.low.consumed_kwh`.
    /// Absent values and unknown paths both give `None`.
    pub fn field(&self, path: &str) -> Option<serde_json::Value> {
        let pointer = format!("/{}", path.replace('.', "/"));
        match self.to_json().pointer(&pointer) {
            None | Some(serde_json::Value::Null) => None,
            Some(v) => Some(v.clone()),
        }
    }
}

impl fmt::Display for MeteringRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.text())
    }
}
