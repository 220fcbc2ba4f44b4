use anyhow::Result;
use clap::Parser;
use tracing::info;

use eth_units::{convert, log, units::Unit};

#[derive(Debug, Clone, clap::ValueEnum)]
enum UnitArg {
    Eth,
    Gwei,
    Wei,
}

impl From<UnitArg> for Unit {
    fn from(unit_arg: UnitArg) -> Self {
        match unit_arg {
            UnitArg::Eth => Unit::Eth,
            UnitArg::Gwei => Unit::Gwei,
            UnitArg::Wei => Unit::Wei,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The amount to convert, in the unit given by --unit.
    value: String,

    /// The unit the amount is denominated in.
    #[clap(long, value_enum, default_value = "eth")]
    unit: UnitArg,

    /// Print the result as JSON instead of one line per unit.
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    log::init();

    let cli = Cli::parse();
    let unit = Unit::from(cli.unit);

    info!("converting {} {}", cli.value, unit);

    let result = convert(&cli.value, unit)?;

    if let Some(amount) = result.amount() {
        info!("canonical amount {} wei", amount);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("eth: {}", result.eth);
        println!("gwei: {}", result.gwei);
        println!("wei: {}", result.wei);
    }

    Ok(())
}
