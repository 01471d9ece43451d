use crate::line_source::LineSource;
use log::{debug, error, info};
use thiserror::Error;

pub mod utils;
pub mod structs;
pub mod parser;
#[cfg(test)]
mod test_telegrams;

pub use parser::parse;
pub use structs::{Dialect, MeteringRecord, RawTelegram};

#[derive(Error, Debug)]
pub enum P1ReadError {
    #[error("Reading from the line source failed: {0}")]
    Transport(#[from] std::io::Error),
    #[error("Received {lines} lines (limit {limit}), we seem to be stuck in a loop")]
    StuckInLoop { lines: usize, limit: usize },
}

/// Collects lines until they form one complete telegram.
///
/// A `/ISk5` header always restarts the buffer and, for a known suffix,
/// selects the dialect. A `!` line only ends the telegram once more lines
/// than the dialect's expected maximum are buffered, earlier ones are kept
/// as body lines.
pub struct TelegramAssembler {
    lines: Vec<String>,
    lines_read: usize,
    dialect: Dialect,
}

impl TelegramAssembler {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            lines_read: 0,
            dialect: Dialect::Unknown,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Lines currently buffered for the telegram being assembled.
    pub fn buffered(&self) -> usize {
        self.lines.len()
    }

    /// All lines pushed so far, discarded ones included.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Feeds one line. Returns the telegram once it is complete; after a
    /// completed telegram or an error the assembler starts over.
    pub fn push_line(&mut self, line: &str) -> Result<Option<RawTelegram>, P1ReadError> {
        let line = line.trim();
        self.lines_read += 1;
        debug!(">> {}", line);

        if let Some(dialect) = Dialect::from_header(line) {
            if !self.lines.is_empty() {
                debug!("New header, dropping {} buffered lines", self.lines.len());
            }
            // An unknown suffix keeps whatever an earlier header selected
            if dialect != Dialect::Unknown {
                self.dialect = dialect;
            }
            debug!("Header {} leaves {:?} dialect", line, self.dialect);
            self.lines.clear();
        }
        self.lines.push(line.to_string());

        let max_lines = self.dialect.expected_max_lines();
        if utils::is_footer_line(line) && self.lines.len() > max_lines {
            let raw = RawTelegram::from(std::mem::take(&mut self.lines));
            self.dialect = Dialect::Unknown;
            return Ok(Some(raw));
        }

        let limit = utils::runaway_limit(max_lines);
        if self.lines.len() > limit {
            let lines = self.lines.len();
            error!("Received {} lines, we seem to be stuck in a loop, quitting", lines);
            self.lines.clear();
            self.dialect = Dialect::Unknown;
            return Err(P1ReadError::StuckInLoop { lines, limit });
        }

        Ok(None)
    }
}

impl Default for TelegramAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls lines until one telegram is framed and returns it undecoded.
/// Line source failures end the read at once, nothing is retried here.
pub fn read_raw_telegram<S: LineSource + ?Sized>(source: &mut S) -> Result<RawTelegram, P1ReadError> {
    let mut assembler = TelegramAssembler::new();

    info!("Start reading lines");
    loop {
        let line = match source.read_line() {
            Ok(line) => line,
            Err(e) => {
                error!("{}", e);
                error!("Read a total of {} lines", assembler.lines_read());
                return Err(e.into());
            }
        };

        if let Some(raw) = assembler.push_line(&line)? {
            info!("Done reading one telegram (containing {} lines)", raw.len());
            debug!("Total lines read from line source: {}", assembler.lines_read());
            return Ok(raw);
        }
    }
}

/// Reads and decodes exactly one telegram.
pub fn read_one_telegram<S: LineSource + ?Sized>(source: &mut S) -> Result<MeteringRecord, P1ReadError> {
    let raw = read_raw_telegram(source)?;
    debug!("Constructing MeteringRecord from raw data");
    Ok(parse(raw))
}
