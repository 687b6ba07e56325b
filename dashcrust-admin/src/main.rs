#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
extern crate dashcrust_net;
extern crate simple_logger;

use std::path::Path;
use std::process;

use clap::ArgMatches;

mod commands;
mod config;
mod error;

use config::Config;
use error::AdminError;

fn main() {
    let matches = Config::matches().get_matches();

    let config = match Config::from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };
    if let Err(e) = simple_logger::init_with_level(config.log_level) {
        eprintln!("Couldn't initialize logger: {}", e);
    }

    let result = match matches.subcommand() {
        ("encode", Some(encode_matches)) => encode(&config, encode_matches),
        ("decode", Some(decode_matches)) => decode(&config, decode_matches),
        _ => {
            println!("{}", matches.usage());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn encode(config: &Config, matches: &ArgMatches) -> Result<(), AdminError> {
    // Both are required above
    let input = Path::new(matches.value_of("INPUT").unwrap_or_default());
    let output = Path::new(matches.value_of("OUTPUT").unwrap_or_default());
    let size = commands::encode_file(&config.codec, input, output)?;
    println!("wrote {} bytes to {}", size, output.display());
    Ok(())
}

fn decode(config: &Config, matches: &ArgMatches) -> Result<(), AdminError> {
    let input = Path::new(matches.value_of("INPUT").unwrap_or_default());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let count = commands::decode_file(&config.codec, input, matches.is_present("hex"), &mut out)?;
    println!("{} headers", count);
    Ok(())
}
