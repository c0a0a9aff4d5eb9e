use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use flagmaker::logging::{init_logging, LoggingConfig};
use flagmaker::{FlagEvent, FlagGenerator};

fn main() -> anyhow::Result<()> {
    let matches = Command::new("Flagmaker")
        .about("Compose striped flag images")
        .version("0.1")
        .arg(
            Arg::new("band")
                .short('b')
                .long("band")
                .action(ArgAction::Append)
                .help("Band as `color[:weight]`, repeat in stripe order")
        )
        .arg(
            Arg::new("width")
                .short('W')
                .long("width")
                .action(ArgAction::Set)
                .help("Canvas width")
        )
        .arg(
            Arg::new("height")
                .short('H')
                .long("height")
                .action(ArgAction::Set)
                .help("Canvas height")
        )
        .arg(
            Arg::new("vertical")
                .short('v')
                .long("vertical")
                .action(ArgAction::SetTrue)
                .help("Vertical stripes")
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .action(ArgAction::Set)
                .default_value(".")
                .help("Output directory for `flag.png`")
        )
        .get_matches();

    init_logging(LoggingConfig::default());

    let mut flag = FlagGenerator::new();
    flag.on_event(|e| if let FlagEvent::Saved(path) = e {
        println!("{}", path.display());
    });

    if let Some(bands) = matches.get_many::<String>("band") {
        let old: Vec<_> = flag.bands().map(|(id, _)| id).collect();
        for id in old {flag.remove_band(id);}
        for band in bands {
            let (color, weight) = match band.rsplit_once(':') {
                Some((color, weight)) => (color, Some(weight)),
                None => (band.as_str(), None),
            };
            let id = flag.create_band(None, Some(color));
            if let Some(weight) = weight {flag.set_weight_input(id, weight);}
        }
    }
    if let Some(w) = matches.get_one::<String>("width") {flag.set_width_input(w)};
    if let Some(h) = matches.get_one::<String>("height") {flag.set_height_input(h)};
    flag.set_vertical(matches.get_flag("vertical"));

    let dir: PathBuf = matches.get_one::<String>("output").map(PathBuf::from).unwrap_or_default();
    flag.save(&dir)?;
    Ok(())
}
