use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::commands::AssumeCommand;

#[derive(Debug, Clone, Parser)]
#[command(name = "wisp", version, about = "Exchange a web identity token for temporary AWS credentials", long_about = None)]
pub struct Cli {
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[command(flatten)]
    pub assume: AssumeCommand,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        self.assume.execute().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_redacted_by_default() {
        let cli = Cli::try_parse_from(["wisp"]).unwrap();
        assert!(!cli.assume.no_redact);
        assert!(!cli.assume.reveal());
    }

    #[test]
    fn test_no_redact_reveals_credentials() {
        let cli = Cli::try_parse_from(["wisp", "--no-redact"]).unwrap();
        assert!(cli.assume.reveal());
    }

    #[test]
    fn test_no_redact_takes_no_value() {
        let result = Cli::try_parse_from(["wisp", "--no-redact=false"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_redact_mixes_with_verbosity() {
        let cli = Cli::try_parse_from(["wisp", "-vv", "--no-redact"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.assume.reveal());

        let cli = Cli::try_parse_from(["wisp", "--no-redact", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(cli.assume.reveal());
    }

    #[test]
    fn test_positional_arguments_rejected() {
        // Inputs come from the environment only
        assert!(Cli::try_parse_from(["wisp", "arn:aws:iam::123:role/demo"]).is_err());
        assert!(Cli::try_parse_from(["wisp", "assume"]).is_err());
    }
}
