mod application;
mod domain;
mod infrastructure;

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use application::config::GeneratorConfig;
use application::error::ApplicationError;
use application::icon_service::IconService;
use application::report::GenerationReport;
use infrastructure::image_processor::DefaultIconProcessor;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = run();
    match &result {
        Ok(report) => {
            info!(
                "Finished: {} succeeded, {} failed",
                report.succeeded(),
                report.failed()
            );
        }
        Err(e) => {
            error!("Icon generation aborted: {:?}", e);
            println!("✗ {}", e);
        }
    }
    ExitCode::from(exit_status(&result))
}

/// 個別の失敗は終了コードに影響しない。致命的なのはロゴ欠落などの中断のみ
fn exit_status(result: &Result<GenerationReport, ApplicationError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn run() -> Result<GenerationReport, ApplicationError> {
    let config = GeneratorConfig::locate()?;
    let service = IconService::new(Arc::new(DefaultIconProcessor::new()));
    service.generate_all(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::report::StepOutcome;
    use domain::icon_target::IconTarget;
    use infrastructure::error::InfrastructureError;
    use std::path::PathBuf;

    #[test]
    fn test_missing_source_exits_non_zero() {
        let result = Err(ApplicationError::SourceNotFound(PathBuf::from("public/wds-logo.png")));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_configuration_error_exits_non_zero() {
        let result = Err(ApplicationError::ConfigurationError("no parent".to_string()));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_failed_steps_still_exit_zero() {
        let report = GenerationReport {
            outcomes: vec![StepOutcome {
                target: IconTarget::png("favicon-16x16.png", 16),
                output_path: PathBuf::from("public/favicon-16x16.png"),
                result: Err(InfrastructureError::ImageProcessingError("bad".to_string()).into()),
            }],
        };
        assert!(!report.all_succeeded());
        assert_eq!(exit_status(&Ok(report)), 0);
        assert_eq!(exit_status(&Ok(GenerationReport::default())), 0);
    }
}
