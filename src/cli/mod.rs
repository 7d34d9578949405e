//! Command-line front end that prints the invoice schedule for a set of terms.

use std::{io::Write, path::PathBuf, str::FromStr};

use rust_decimal::Decimal;

use crate::{
    config::{Config, ConfigManager, OutputFormat},
    errors::CliError,
    subscription::{Subscription, SubscriptionRequest, SubscriptionType},
    utils::build_info,
};

pub const USAGE: &str = "\
Usage: subscription_core_cli --type <daily|weekly|monthly> --start <dd/MM/yyyy> --end <dd/MM/yyyy> [--charge <amount>] [--json] [--config <path>]

Options:
  -t, --type <TYPE>      Billing period
  -s, --start <DATE>     First invoice date
  -e, --end <DATE>       Last invoice date
  -c, --charge <AMOUNT>  Charge per invoice (default 0)
      --json             Print the invoice summary as JSON
      --config <PATH>    Configuration file to read
  -h, --help             Show this message
  -V, --version          Show build information";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub request: SubscriptionRequest,
    pub json: bool,
    pub config_path: Option<PathBuf>,
    pub help: bool,
    pub version: bool,
}

impl CliArgs {
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = CliArgs::default();
        let mut iter = args.into_iter().map(Into::into);

        while let Some(flag) = iter.next() {
            match flag.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-V" | "--version" => parsed.version = true,
                "--json" => parsed.json = true,
                "-t" | "--type" => {
                    let value = expect_value(&flag, iter.next())?;
                    parsed.request.subscription_type = Some(SubscriptionType::from_str(&value)?);
                }
                "-s" | "--start" => {
                    parsed.request.start_date = Some(expect_value(&flag, iter.next())?);
                }
                "-e" | "--end" => {
                    parsed.request.end_date = Some(expect_value(&flag, iter.next())?);
                }
                "-c" | "--charge" => {
                    let value = expect_value(&flag, iter.next())?;
                    parsed.request.charge = Decimal::from_str(value.trim()).map_err(|_| {
                        CliError::Usage(format!("`{value}` is not a valid charge amount"))
                    })?;
                }
                "--config" => {
                    parsed.config_path = Some(PathBuf::from(expect_value(&flag, iter.next())?));
                }
                other => return Err(CliError::Usage(format!("unknown argument `{other}`"))),
            }
        }

        Ok(parsed)
    }
}

fn expect_value(flag: &str, value: Option<String>) -> Result<String, CliError> {
    value.ok_or_else(|| CliError::Usage(format!("`{flag}` needs a value")))
}

/// Entry point used by the binary: reads process arguments, writes to stdout.
pub fn run_cli() -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_args(std::env::args().skip(1), &mut out)
}

pub fn run_with_args<I, S, W>(args: I, out: &mut W) -> Result<(), CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    W: Write,
{
    let args = CliArgs::parse(args)?;

    if args.help {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    }
    if args.version {
        writeln!(out, "{}", build_info::current().version_line())?;
        return Ok(());
    }

    let subscription = Subscription::try_from(args.request)?;

    let manager = match &args.config_path {
        Some(path) => ConfigManager::new(path.clone()),
        None => ConfigManager::default_location(),
    };
    let config = manager.load()?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };
    render(&subscription, &config, format, out)
}

fn render<W: Write>(
    subscription: &Subscription,
    config: &Config,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&subscription.summary())?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Text => {
            for date in subscription.invoice_dates() {
                writeln!(out, "{date}")?;
            }
            writeln!(
                out,
                "Total: {} {}",
                subscription.total_charge(),
                config.currency
            )?;
        }
    }
    Ok(())
}
