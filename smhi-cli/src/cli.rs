use anyhow::Context;
use clap::Parser;
use smhi_core::SmhiClient;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "smhi", version, about = "SMHI point-forecast fetcher")]
pub struct Cli {
    /// Latitude in decimal degrees, e.g. 59.33.
    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in decimal degrees, e.g. 18.06.
    #[arg(allow_negative_numbers = true)]
    pub longitude: f64,

    /// Print the forecast document on a single line.
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = SmhiClient::new();
        let forecast = client
            .get_forecast(self.latitude, self.longitude)
            .await
            .context("Failed to fetch forecast from SMHI")?;

        let rendered = if self.compact {
            serde_json::to_string(&forecast)?
        } else {
            serde_json::to_string_pretty(&forecast)?
        };
        println!("{rendered}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_coordinate_pair() {
        let cli = Cli::try_parse_from(["smhi", "59.33", "18.06"]).unwrap();

        assert_eq!(cli.latitude, 59.33);
        assert_eq!(cli.longitude, 18.06);
        assert!(!cli.compact);
    }

    #[test]
    fn accepts_southern_and_western_coordinates() {
        let cli = Cli::try_parse_from(["smhi", "-33.87", "-70.65"]).unwrap();

        assert_eq!(cli.latitude, -33.87);
        assert_eq!(cli.longitude, -70.65);
    }

    #[test]
    fn rejects_a_missing_longitude() {
        assert!(Cli::try_parse_from(["smhi", "59.33"]).is_err());
    }
}
