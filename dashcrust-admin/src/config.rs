use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{App, Arg, ArgMatches, SubCommand};
use dashcrust_net::{HeaderCodec, TableReferencePolicy};
use log::Level;

use crate::error::AdminError;


#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub codec: CodecSection,
}

#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CodecSection {
    pub table_reference: TableReferencePolicy,
}

#[derive(Debug)]
pub struct Config {
    pub log_level: Level,
    pub codec: HeaderCodec,
}

impl<'a, 'b> Config {
    pub fn from_args(matches: &ArgMatches) -> Result<Config, AdminError> {
        let log_level = match matches.occurrences_of("debug") {
            0 => Level::Warn,
            1 => Level::Info,
            2 => Level::Debug,
            3 | _ => Level::Trace,
        };
        let config_file_path: Option<PathBuf> = matches.value_of("config")
            .map(PathBuf::from)
            .or_else(|| {
                env::var_os("HOME").map(|home| {
                    let mut path = PathBuf::from(home);
                    path.push(".dashcrust.toml");
                    path
                })
            });

        let config_from_file = match config_file_path {
            Some(ref path) if path.exists() => {
                let s = fs::read_to_string(path)?;
                toml::from_str(&s).map_err(|e| {
                    AdminError::Config {
                        path: path.clone(),
                        source: e,
                    }
                })?
            }
            _ => ConfigFile::default(),
        };

        let policy = if matches.is_present("strict") {
            TableReferencePolicy::Strict
        } else {
            config_from_file.codec.table_reference
        };

        Ok(Config {
            log_level: log_level,
            codec: HeaderCodec::new(policy),
        })
    }

    pub fn matches() -> App<'a, 'b> {
        let input = Arg::with_name("INPUT")
            .required(true)
            .index(1);
        App::new("dashcrust-admin")
            .version(crate_version!())
            .about("Encodes and inspects DIP-0025 headers2 payloads")
            .arg(Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("Location of the config file, default: $HOME/.dashcrust.toml"))
            .arg(Arg::with_name("debug")
                .short("d")
                .long("debug")
                .multiple(true)
                .help("Turn debugging information on"))
            .arg(Arg::with_name("strict")
                .long("strict")
                .help("Reject records that reference unknown version table entries"))
            .subcommand(SubCommand::with_name("encode")
                .about("Compress a file of raw 80 byte headers into a headers2 payload")
                .arg(input.clone().help("Concatenated raw headers"))
                .arg(Arg::with_name("OUTPUT")
                    .required(true)
                    .index(2)
                    .help("Where to write the headers2 payload")))
            .subcommand(SubCommand::with_name("decode")
                .about("Print the headers in a headers2 payload")
                .arg(input.help("headers2 payload"))
                .arg(Arg::with_name("hex")
                    .long("hex")
                    .help("INPUT holds hex text instead of raw bytes")))
    }
}
