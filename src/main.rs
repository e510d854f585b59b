use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use sitecfg::config::{Error, Format, SiteConfig};
use sitecfg::logger;
use sitecfg::presets::Preset;
use std::path::Path;
use tracing::{info, warn};

fn app() -> App<'static, 'static> {
    let format_arg = Arg::with_name("format")
        .long("format")
        .short("f")
        .takes_value(true)
        .possible_values(&["yaml", "json"])
        .default_value("yaml")
        .help("Output format");
    let dir_arg = Arg::with_name("dir")
        .index(1)
        .default_value(".")
        .help("Directory to search (with its parents) for `site.config.yaml`");

    App::new("sitecfg")
        .about("Checks and exports the blog's site configuration")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .takes_value(true)
                .global(true)
                .help("Log level; overrides RUST_LOG, which defaults to info"),
        )
        .subcommand(
            SubCommand::with_name("check")
                .about("Validates the project file")
                .arg(dir_arg.clone()),
        )
        .subcommand(
            SubCommand::with_name("export")
                .about("Prints the project file's configuration")
                .arg(dir_arg)
                .arg(format_arg.clone()),
        )
        .subcommand(
            SubCommand::with_name("preset")
                .about("Prints a built-in configuration variant")
                .arg(
                    Arg::with_name("name")
                        .index(1)
                        .required(true)
                        .help("Variant name (see `presets`)"),
                )
                .arg(format_arg),
        )
        .subcommand(
            SubCommand::with_name("presets")
                .about("Lists the built-in configuration variants"),
        )
}

fn main() {
    let matches = app().get_matches();

    let logged = match matches.value_of("log-level") {
        Some(level) => logger::init(level, true),
        None => logger::init("info", false),
    };
    if let Err(e) = logged {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    match run(&matches) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

// Returns `Ok(false)` when the configuration has violations or the requested
// preset doesn't exist.
fn run(matches: &ArgMatches) -> Result<bool, Error> {
    match matches.subcommand() {
        ("check", Some(sub)) => {
            let config = load(sub)?;
            let violations = config.validate();
            for violation in &violations {
                warn!(%violation, "invalid configuration");
                println!("{}", violation);
            }
            info!(violations = violations.len(), "check finished");
            Ok(violations.is_empty())
        }
        ("export", Some(sub)) => {
            let config = load(sub)?;
            print(&config, sub)?;
            Ok(true)
        }
        ("preset", Some(sub)) => {
            let name = sub.value_of("name").unwrap_or_default();
            match name.parse::<Preset>() {
                Ok(preset) => {
                    print(&preset.build(), sub)?;
                    Ok(true)
                }
                Err(e) => {
                    eprintln!("error: {}", e);
                    Ok(false)
                }
            }
        }
        ("presets", Some(_)) => {
            for preset in Preset::all().iter() {
                println!("{}", preset);
            }
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn load(matches: &ArgMatches) -> Result<SiteConfig, Error> {
    let dir = Path::new(matches.value_of("dir").unwrap_or("."));
    info!(dir = %dir.display(), "loading site configuration");
    SiteConfig::from_directory(dir)
}

fn print(config: &SiteConfig, matches: &ArgMatches) -> Result<(), Error> {
    // clap restricts `format` to its possible values
    let format = matches
        .value_of("format")
        .and_then(|f| f.parse::<Format>().ok())
        .unwrap_or(Format::Yaml);
    print!("{}", config.export(format)?);
    if format == Format::Json {
        println!();
    }
    Ok(())
}
