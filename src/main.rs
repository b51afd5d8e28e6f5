use clap::Parser;
use std::io::IsTerminal;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tweet_sentiment::app::render::{RenderOptions, TerminalRenderer};
use tweet_sentiment::config::toml_config::DEFAULT_CONFIG_FILE;
use tweet_sentiment::config::{Command, LogFormat};
use tweet_sentiment::domain::ports::ConfigProvider;
use tweet_sentiment::utils::error::ErrorSeverity;
use tweet_sentiment::utils::{logger, validation::Validate};
use tweet_sentiment::{
    AppConfig, ArtifactClassifier, BatchEngine, BatchPipeline, CliConfig, HttpStorage,
    LocalStorage, SentimentAnalyzer, SentimentError,
};

const QUIT_COMMAND: &str = ":q";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    tracing::info!("✅ Configuration loaded and validated successfully");

    let classifier = match load_classifier(&config).await {
        Ok(classifier) => classifier,
        Err(e) => fail(&e),
    };
    let analyzer = SentimentAnalyzer::new(classifier);

    let stdout = std::io::stdout();
    let options = RenderOptions::for_output(
        config.display.animations,
        std::time::Duration::from_millis(config.display.frame_delay_ms),
        stdout.is_terminal(),
    );
    let mut renderer = TerminalRenderer::new(stdout, options);

    match cli.command {
        Command::Analyze { text } => {
            if config.display.show_banner {
                renderer.banner()?;
            }
            match analyzer.analyze(&text) {
                Ok(analysis) => renderer.render(&analysis).await?,
                Err(e) => fail(&e),
            }
            if config.display.show_banner {
                renderer.footer()?;
            }
        }
        Command::Interactive => {
            if config.display.show_banner {
                renderer.banner()?;
            }

            let mut stdout = tokio::io::stdout();
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                stdout.write_all("✍️ Enter a tweet below: ".as_bytes()).await?;
                stdout.flush().await?;

                let Some(line) = lines.next_line().await? else {
                    break;
                };
                if line.trim() == QUIT_COMMAND {
                    break;
                }

                match analyzer.analyze(&line) {
                    Ok(analysis) => renderer.render(&analysis).await?,
                    Err(e) => {
                        tracing::error!("❌ Analysis failed: {}", e);
                        eprintln!("❌ {}", e.user_friendly_message());
                    }
                }
            }

            if config.display.show_banner {
                renderer.footer()?;
            }
        }
        Command::Batch { input, output, .. } => {
            let storage = LocalStorage::new(".");
            let pipeline =
                BatchPipeline::new(storage, analyzer, input, output, config.text_column());

            match BatchEngine::new(pipeline).run().await {
                Ok(summary) => renderer.render_summary(&summary)?,
                Err(e) => fail(&e),
            }
        }
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> tweet_sentiment::Result<AppConfig> {
    tracing::info!("📁 Loading configuration from: {}", cli.config);

    // 預設檔案可以不存在；明確指定的檔案必須存在
    let mut config = if cli.config == DEFAULT_CONFIG_FILE {
        AppConfig::from_file_or_default(&cli.config)?
    } else {
        AppConfig::from_file(&cli.config)?
    };

    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

async fn load_classifier(config: &AppConfig) -> tweet_sentiment::Result<ArtifactClassifier> {
    if config.artifacts_are_remote() {
        let storage = HttpStorage::new(config.artifact_base())?;
        ArtifactClassifier::load(&storage, config.vectorizer_artifact(), config.model_artifact()).await
    } else {
        let storage = LocalStorage::new(config.artifact_base());
        ArtifactClassifier::load(&storage, config.vectorizer_artifact(), config.model_artifact()).await
    }
}

fn fail(e: &SentimentError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
