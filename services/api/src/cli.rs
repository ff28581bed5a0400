use crate::score::{run_score, run_weights, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ethical_propensity::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Ethical Propensity Score",
    about = "Score AI hiring pipelines on bias, transparency, accountability, privacy, fairness, and sentiment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute the EPS and recommendations for a set of audit counters
    Score(ScoreArgs),
    /// Print the default metric weights and their allowed range
    Weights,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Weights => run_weights(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["eps"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_overrides() {
        let cli = Cli::try_parse_from([
            "eps",
            "score",
            "--sample",
            "--bias-complaints",
            "12",
            "--fairness-weight",
            "0",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert!(args.sample);
                assert!(args.json);
                assert_eq!(args.counters.bias_complaints, Some(12.0));
                assert_eq!(args.weights.fairness_weight, Some(0));
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }
}
