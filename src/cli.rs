//! Command line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

use crate::parcel::{DEFAULT_SOURCE_CRS, DEFAULT_TARGET_CRS};

/// Build the `parcelproj` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("parcelproj")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert state plane parcel records into WGS84 GeoJSON")
        .arg(
            Arg::new("input")
                .help("Input JSON file of parcel records, or - for stdin")
                .required_unless_present("coordinate")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output GeoJSON file (defaults to stdout)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("source-crs")
                .long("source-crs")
                .help(format!("Source CRS: EPSG code, alias or PROJ string [default: {}]", DEFAULT_SOURCE_CRS))
                .value_name("CRS")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("target-crs")
                .long("target-crs")
                .help(format!("Target CRS: EPSG code, alias or PROJ string [default: {}]", DEFAULT_TARGET_CRS))
                .value_name("CRS")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with a [conversion] table")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("fail-fast")
                .long("fail-fast")
                .help("Abort on the first record that fails instead of skipping it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show a progress bar while converting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("inspect")
                .long("inspect")
                .help("List each parcel's properties and the overall bounds instead of writing GeoJSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("coordinate")
                .long("coordinate")
                .help("Project a single 'x,y' position and print the result")
                .value_name("X,Y")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("inverse")
                .long("inverse")
                .help("With --coordinate, project from the target CRS back to the source CRS")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file as well as the console")
                .value_name("FILE")
                .required(false),
        )
}
