use crate::config::toml_config::{AppConfig, DEFAULT_CONFIG_FILE};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "tweet-sentiment")]
#[command(about = "Classify the sentiment of a tweet with a pre-trained model")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Directory or http(s) URL holding the artifacts (overrides the config file)
    #[arg(long, global = true)]
    pub artifacts: Option<String>,

    /// Model artifact file name
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Vectorizer artifact file name
    #[arg(long, global = true)]
    pub vectorizer: Option<String>,

    /// Print reactions without animation frames
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Skip the title/about banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Analyze a single tweet
    Analyze {
        /// The tweet text
        text: String,
    },
    /// Read tweets from stdin, one per line (`:q` or EOF to quit)
    Interactive,
    /// Classify every row of a CSV file
    Batch {
        #[arg(short, long)]
        input: String,

        #[arg(short, long, default_value = "predictions.csv")]
        output: String,

        /// Column holding the tweet text (overrides the config file)
        #[arg(long)]
        column: Option<String>,
    },
}

impl CliConfig {
    /// 應用命令列覆蓋設定
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(base) = &self.artifacts {
            config.artifacts.base = base.clone();
        }
        if let Some(model) = &self.model {
            config.artifacts.model = model.clone();
        }
        if let Some(vectorizer) = &self.vectorizer {
            config.artifacts.vectorizer = vectorizer.clone();
        }
        if self.no_animation {
            config.display.animations = false;
        }
        if self.no_banner {
            config.display.show_banner = false;
        }
        if let Command::Batch {
            column: Some(column),
            ..
        } = &self.command
        {
            config.batch.text_column = column.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_with_overrides() {
        let cli = CliConfig::try_parse_from([
            "tweet-sentiment",
            "--artifacts",
            "https://models.example.com",
            "--no-animation",
            "analyze",
            "what a day",
        ])
        .unwrap();

        assert!(matches!(&cli.command, Command::Analyze { text } if text == "what a day"));

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.artifacts.base, "https://models.example.com");
        assert!(!config.display.animations);
        assert!(config.display.show_banner);
    }

    #[test]
    fn test_batch_column_override() {
        let cli = CliConfig::try_parse_from([
            "tweet-sentiment",
            "batch",
            "--input",
            "tweets.csv",
            "--column",
            "tweet",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.batch.text_column, "tweet");
        assert!(matches!(&cli.command, Command::Batch { output, .. } if output == "predictions.csv"));
    }

    #[test]
    fn test_log_format_flag() {
        let cli =
            CliConfig::try_parse_from(["tweet-sentiment", "--log-format", "json", "interactive"])
                .unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.config, DEFAULT_CONFIG_FILE);
    }
}
