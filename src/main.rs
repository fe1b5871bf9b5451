use clap::Parser;
use secret_santa::core::Notifier;
use secret_santa::domain::ports::Storage;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{
    CliConfig, ConsoleNotifier, EmailTemplate, LocalStorage, MailNotifier, SantaConfig,
    SantaEngine, SantaError, SantaPipeline, SmtpMailer,
};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🎅 Starting secret-santa");
    tracing::debug!("CLI config: {:?}", cli);

    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config_path(), e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    cli.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::beside(cli.config_path());

    let notifier = match build_notifier(&config, &storage, &cli).await {
        Ok(notifier) => notifier,
        Err(e) => fail(e),
    };
    tracing::info!("📬 Results will be delivered via {}", notifier.channel());

    let pipeline = SantaPipeline::new(storage, config, notifier);
    let engine = SantaEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ Done: {} participants matched in {} attempt(s), {} notified",
                summary.participants,
                summary.attempts,
                summary.delivered
            );
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> secret_santa::Result<SantaConfig> {
    let path = cli.config_path();
    if cli.config_is_implicit() && !Path::new(path).exists() {
        tracing::warn!("No {} found, using defaults", path);
        return Ok(SantaConfig::default());
    }

    tracing::info!("📁 Loading configuration from: {}", path);
    SantaConfig::from_file(path)
}

async fn build_notifier(
    config: &SantaConfig,
    storage: &LocalStorage,
    cli: &CliConfig,
) -> secret_santa::Result<Box<dyn Notifier>> {
    let Some(mail) = &config.mail else {
        return Ok(Box::new(ConsoleNotifier::new(cli.format)));
    };

    let template = match &mail.template {
        Some(path) => {
            let raw = storage.read_file(path).await?;
            let source = String::from_utf8(raw).map_err(|e| SantaError::TemplateError {
                message: format!("{} is not UTF-8: {}", path, e),
            })?;
            EmailTemplate::parse(source)?
        }
        None => EmailTemplate::default_template()?,
    };

    let mailer = SmtpMailer::from_config(mail)?;
    Ok(Box::new(MailNotifier::new(
        mailer,
        template,
        config.mail_subject(),
    )))
}

fn fail(e: SantaError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
