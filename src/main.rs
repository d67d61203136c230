use anyhow::{Context as _, Result};
use bidcalc::select::{calculate, candidates};
use bidcalc::tracing_helper::initialize;
use bidcalc::BidCalcModel;
use std::path::PathBuf;
use structopt::clap::AppSettings;
use structopt::StructOpt;

const USAGE: [&str; 2] = [
    "Usage: bidcalc <num_of_servers> <bid>+",
    "Example: bidcalc 5 20 15 10 9 1",
];

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bidcalc",
    about = "Finds the bid that maximizes revenue when used as the uniform clearing price.",
    setting = AppSettings::AllowLeadingHyphen
)]
struct Arguments {
    #[structopt(long, env = "LOG_FILTER", default_value = "warn")]
    pub log_filter: String,

    /// Print the result record as JSON instead of the result line.
    #[structopt(long)]
    json: bool,

    /// Print the revenue of every considered bid before the result.
    #[structopt(long)]
    explain: bool,

    /// Reject malformed numbers instead of reading them as 0.
    #[structopt(long)]
    strict: bool,

    /// Read `{"capacity": .., "bids": [..]}` from a JSON file.
    #[structopt(long, parse(from_os_str), conflicts_with_all = &["capacity", "bids"])]
    input: Option<PathBuf>,

    /// Number of servers up for auction.
    capacity: Option<String>,

    /// Bid prices in descending order.
    bids: Vec<String>,
}

/// Builds the selection input, or `None` when there is nothing to select and
/// the usage should be shown.
fn resolve_model(args: &Arguments) -> Result<Option<BidCalcModel>> {
    match (&args.input, &args.capacity) {
        (Some(path), _) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let model = serde_json::from_str::<BidCalcModel>(&data)
                .with_context(|| format!("malformed bid input in {}", path.display()))?;
            Ok(Some(model))
        }
        (None, Some(capacity)) => Ok(Some(BidCalcModel::from_tokens(
            capacity,
            &args.bids,
            args.strict,
        )?)),
        (None, None) => Ok(None),
    }
}

fn output_lines(args: &Arguments) -> Result<Vec<String>> {
    let model = match resolve_model(args)? {
        Some(model) => model,
        None => return Ok(USAGE.iter().map(|line| line.to_string()).collect()),
    };

    let mut lines = Vec::new();
    if args.explain {
        lines.extend(
            candidates(&model.bids, model.capacity).map(|candidate| candidate.to_string()),
        );
    }
    let report = calculate(&model);
    if args.json {
        lines.push(serde_json::to_string(&report)?);
    } else {
        lines.push(report.to_string());
    }
    Ok(lines)
}

fn main() -> Result<()> {
    let args = Arguments::from_args();
    initialize(args.log_filter.as_str());
    tracing::debug!("running bidcalc with {:#?}", args);

    for line in output_lines(&args)? {
        println!("{}", line);
    }
    Ok(())
}
