use std::path::PathBuf;

use super::error::ApplicationError;
use crate::domain::icon_target::{IconFormat, IconTarget};

/// Result of generating one output file. Failures are kept, not propagated.
#[derive(Debug)]
pub struct StepOutcome {
    pub target: IconTarget,
    pub output_path: PathBuf,
    pub result: Result<(), ApplicationError>,
}

impl StepOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }

    /// The `✓`/`✗` line printed once the step finishes.
    pub fn message(&self) -> String {
        let path = self.output_path.display();
        match (&self.result, self.target.format) {
            (Ok(()), IconFormat::Ico) => {
                format!("✓ Created {} with sizes: {:?}", path, self.target.sizes)
            }
            (Ok(()), IconFormat::Png) => {
                let size = self.target.sizes.first().copied().unwrap_or_default();
                format!("✓ Created {} ({}x{})", path, size, size)
            }
            (Err(e), IconFormat::Ico) => format!("✗ Error creating ICO: {}", e),
            (Err(e), IconFormat::Png) => format!("✗ Error creating {}: {}", path, e),
        }
    }
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<StepOutcome>,
}

impl GenerationReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let headline = if self.all_succeeded() {
            "✓ All icons generated successfully!".to_string()
        } else {
            format!(
                "✗ {} of {} icons failed to generate",
                self.failed(),
                self.outcomes.len()
            )
        };

        let mut lines = vec![headline, String::new(), "Generated files:".to_string()];
        lines.extend(
            self.outcomes
                .iter()
                .map(|o| format!("  - {}", o.target.describe())),
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::error::InfrastructureError;

    fn ok(target: IconTarget) -> StepOutcome {
        StepOutcome {
            output_path: PathBuf::from("public").join(&target.file_name),
            target,
            result: Ok(()),
        }
    }

    fn failed(target: IconTarget, msg: &str) -> StepOutcome {
        StepOutcome {
            output_path: PathBuf::from("public").join(&target.file_name),
            target,
            result: Err(InfrastructureError::ImageProcessingError(msg.to_string()).into()),
        }
    }

    #[test]
    fn test_messages() {
        let ico = ok(IconTarget::ico("favicon.ico", &[16, 32, 48]));
        assert_eq!(
            ico.message(),
            format!(
                "✓ Created {} with sizes: [16, 32, 48]",
                PathBuf::from("public/favicon.ico").display()
            )
        );

        let png = ok(IconTarget::png("icon-192x192.png", 192));
        assert!(png.message().starts_with("✓ Created "));
        assert!(png.message().ends_with("icon-192x192.png (192x192)"));

        let bad_ico = failed(IconTarget::ico("favicon.ico", &[16]), "bad");
        assert_eq!(bad_ico.message(), "✗ Error creating ICO: Image processing failed: bad");

        let bad_png = failed(IconTarget::png("favicon-16x16.png", 16), "bad");
        assert!(bad_png.message().starts_with("✗ Error creating "));
        assert!(bad_png.message().ends_with("favicon-16x16.png: Image processing failed: bad"));
    }

    #[test]
    fn test_summary_all_succeeded() {
        let report = GenerationReport {
            outcomes: vec![
                ok(IconTarget::ico("favicon.ico", &[16, 32, 48])),
                ok(IconTarget::png("apple-touch-icon.png", 180)),
            ],
        };
        assert!(report.all_succeeded());
        assert_eq!(
            report.summary_lines(),
            vec![
                "✓ All icons generated successfully!",
                "",
                "Generated files:",
                "  - favicon.ico (16x16, 32x32, 48x48)",
                "  - apple-touch-icon.png (180x180)",
            ]
        );
    }

    #[test]
    fn test_summary_counts_failures() {
        let report = GenerationReport {
            outcomes: vec![
                failed(IconTarget::ico("favicon.ico", &[16]), "x"),
                ok(IconTarget::png("icon-512x512.png", 512)),
                failed(IconTarget::png("favicon-32x32.png", 32), "y"),
            ],
        };
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 2);
        assert!(!report.all_succeeded());
        let lines = report.summary_lines();
        assert_eq!(lines[0], "✗ 2 of 3 icons failed to generate");
        // every expected file is still listed
        assert_eq!(lines.len(), 3 + 3);
    }
}
