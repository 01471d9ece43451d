//! P1 smart meter reader
//!
//! Frames the telegrams a DSMR smart meter pushes over its P1 port and
//! decodes them into [`MeteringRecord`]s. The serial link itself is not
//! handled here, anything implementing [`LineSource`] can feed the framer.

pub mod line_source;
pub mod metering_p1;
#[cfg(feature = "cli")]
pub mod config;

// Re-export common types for easier access
pub use line_source::{LineReader, LineSource};
pub use metering_p1::{parse, read_one_telegram, read_raw_telegram, P1ReadError, TelegramAssembler};
pub use metering_p1::structs::{Dialect, ElectricityData, GasData, MessageData, MeteringRecord, RawTelegram, TariffReading};
