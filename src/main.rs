use anyhow::Context;
use clap::Parser;
use wcs_scaling::utils::{logger, validation::Validate};
use wcs_scaling::{CliConfig, KvpSerializable, Scaling, ScalingError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_log {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let (scaling, endpoint) = match config.resolve() {
        Ok(resolved) => resolved,
        Err(ScalingError::IoError(e)) => {
            return Err(e)
                .with_context(|| format!("Failed to load config file {:?}", config.config));
        }
        Err(e) => exit_with(&e),
    };

    println!("{}", render(&scaling, endpoint));
    Ok(())
}

fn render(scaling: &Scaling, endpoint: Option<url::Url>) -> String {
    match endpoint {
        Some(mut url) => {
            scaling.append_to(&mut url);
            tracing::info!("Rendered {} for {}", scaling.key(), url.host_str().unwrap_or("-"));
            url.to_string()
        }
        None => scaling.to_kvp(),
    }
}

fn exit_with(error: &ScalingError) -> ! {
    tracing::error!("❌ Invalid scaling input: {}", error);
    eprintln!("❌ {}", error.user_friendly_message());
    std::process::exit(1);
}
