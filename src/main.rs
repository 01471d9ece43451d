use p1reader::config::{Config, OutputFormat};
use p1reader::{read_one_telegram, LineReader, LineSource, MeteringRecord};
use log::{error, info, warn};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn open_device(device: &str) -> io::Result<LineReader<Box<dyn BufRead>>> {
    if device == "-" {
        info!("Reading telegrams from stdin");
        let reader: Box<dyn BufRead> = Box::new(BufReader::new(io::stdin()));
        return Ok(LineReader::new(reader));
    }

    info!("Reading telegrams from {}", device);
    let reader: Box<dyn BufRead> = Box::new(BufReader::new(File::open(device)?));
    Ok(LineReader::new(reader))
}

fn print_record(config: &Config, record: &MeteringRecord) -> Result<(), Box<dyn Error>> {
    let mut value = record.to_json();
    if config.timestamp {
        if let Some(obj) = value.as_object_mut() {
            obj.insert("read_at".to_string(), chrono::Utc::now().to_rfc3339().into());
        }
    }

    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&value)?),
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(&value)?),
        OutputFormat::Raw => println!("{}", record),
    }
    Ok(())
}

/// Reads one record, starting over after a failed framing cycle until the
/// configured number of retries is used up.
fn read_with_retries<S: LineSource>(source: &mut S, retries: u32) -> Result<MeteringRecord, Box<dyn Error>> {
    let mut attempt = 0;
    loop {
        match read_one_telegram(source) {
            Ok(record) => return Ok(record),
            Err(e) if attempt < retries => {
                attempt += 1;
                warn!("Reading telegram failed ({}), retry {} of {}", e, attempt, retries);
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    let default_filter = std::env::var("P1_LOG_LEVEL").unwrap_or("info".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    let config_path = std::env::var("P1_CONFIG").ok();
    let config = Config::load(config_path.as_deref())?;

    let mut source = open_device(&config.device)?;

    let mut count: u64 = 0;
    while config.telegrams == 0 || count < config.telegrams {
        let record = match read_with_retries(&mut source, config.retries) {
            Ok(record) => record,
            Err(e) => {
                error!("Giving up after {} telegrams: {}", count, e);
                return Err(e);
            }
        };

        print_record(&config, &record)?;
        count += 1;
    }

    info!("Read {} telegrams, exiting", count);
    Ok(())
}
