use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::config::GeneratorConfig;
use super::error::ApplicationError;
use super::report::{GenerationReport, StepOutcome};
use crate::domain::error::DomainError;
use crate::domain::icon_processor_trait::IconProcessor;
use crate::domain::icon_target::{IconFormat, IconTarget};
use crate::infrastructure::file_storage::LocalFileStorage;

/// Runs the icon pipeline: one step per target, each reading the logo afresh
/// and failing on its own.
pub struct IconService {
    icon_processor: Arc<dyn IconProcessor + Send + Sync>,
    file_storage: LocalFileStorage,
}

impl IconService {
    pub fn new(icon_processor: Arc<dyn IconProcessor + Send + Sync>) -> Self {
        Self {
            icon_processor,
            file_storage: LocalFileStorage::new(),
        }
    }

    pub fn create_ico(&self, source_path: &Path, output_path: &Path, sizes: &[u32]) -> StepOutcome {
        let target = IconTarget::ico(file_name_of(output_path), sizes);
        self.run_step(source_path, output_path, target)
    }

    pub fn create_png_icon(&self, source_path: &Path, output_path: &Path, size: u32) -> StepOutcome {
        let target = IconTarget::png(file_name_of(output_path), size);
        self.run_step(source_path, output_path, target)
    }

    /// Generates every configured target, in order, and prints the report.
    ///
    /// Only a missing source logo (or an invalid config) is an error; failed
    /// steps are recorded in the returned report.
    pub fn generate_all(&self, config: &GeneratorConfig) -> Result<GenerationReport, ApplicationError> {
        config.validate()?;

        let source_path = config.source_path();
        if !self.file_storage.exists(&source_path) {
            return Err(ApplicationError::SourceNotFound(source_path));
        }

        println!("Generating icons from {}...", source_path.display());
        println!();

        let mut report = GenerationReport::default();
        for target in &config.targets {
            let output_path = config.output_path(target);
            let outcome = match target.format {
                IconFormat::Ico => self.create_ico(&source_path, &output_path, &target.sizes),
                // validate() has already rejected empty or zero sizes
                IconFormat::Png => {
                    let size = target.sizes.first().copied().unwrap_or_default();
                    self.create_png_icon(&source_path, &output_path, size)
                }
            };
            report.outcomes.push(outcome);
        }

        println!();
        for line in report.summary_lines() {
            println!("{}", line);
        }
        Ok(report)
    }

    fn run_step(&self, source_path: &Path, output_path: &Path, target: IconTarget) -> StepOutcome {
        debug!("Generating {} from {}", target.describe(), source_path.display());
        let result = self.write_target(source_path, output_path, &target);
        if let Err(e) = &result {
            debug!("{} failed: {:?}", target.file_name, e);
        }

        let outcome = StepOutcome {
            target,
            output_path: output_path.to_path_buf(),
            result,
        };
        println!("{}", outcome.message());
        outcome
    }

    fn write_target(
        &self,
        source_path: &Path,
        output_path: &Path,
        target: &IconTarget,
    ) -> Result<(), ApplicationError> {
        let source_bytes = self.file_storage.read_image(source_path)?;
        let encoded = match target.format {
            IconFormat::Ico => self.icon_processor.create_ico(&source_bytes, &target.sizes)?,
            IconFormat::Png => {
                let size = target
                    .sizes
                    .first()
                    .copied()
                    .ok_or_else(|| DomainError::EmptySizes(target.file_name.clone()))?;
                self.icon_processor.create_png_icon(&source_bytes, size)?
            }
        };
        self.file_storage.save_image(output_path, &encoded)?;
        Ok(())
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
