//! Favicon generation pipeline
//!
//! Enumerates the configured sizes, renders them and writes every output,
//! printing progress to stdout as each file lands.

use crate::assets::{AssetError, AssetWriter, OutputMode, WrittenAsset};
use crate::config::GeneratorConfig;
use crate::core::{hex, BADGE_BLACK, FLAG_RED, POLE_GRAY};

/// Which outputs a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    pub container: bool,
    pub standalone: bool,
}

impl Targets {
    pub fn all() -> Self {
        Self {
            container: true,
            standalone: true,
        }
    }

    pub fn container_only() -> Self {
        Self {
            container: true,
            standalone: false,
        }
    }

    pub fn standalone_only() -> Self {
        Self {
            container: false,
            standalone: true,
        }
    }
}

impl Default for Targets {
    fn default() -> Self {
        Self::all()
    }
}

pub struct Generator {
    config: GeneratorConfig,
    writer: AssetWriter,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let writer = AssetWriter::new(&config.output_dir);
        Self { config, writer }
    }

    /// Run the pipeline to completion, stopping at the first failure
    pub fn run(&self, targets: Targets) -> Result<Vec<WrittenAsset>, AssetError> {
        println!(
            "Generating favicon assets in {}",
            self.writer.out_dir().display()
        );
        tracing::info!(out_dir = %self.writer.out_dir().display(), ?targets, "starting favicon generation");

        self.writer.ensure_dir()?;

        let report = |asset: &WrittenAsset| println!("Generated {}", asset);
        let mut written = Vec::new();

        if targets.container {
            let mode = OutputMode::Container {
                file_name: self.config.container.file_name.clone(),
            };
            written.extend(self.writer.write(&mode, &self.config.container.sizes, report)?);
        }

        if targets.standalone {
            written.extend(self.writer.write(
                &OutputMode::Standalone,
                &self.config.standalone.sizes,
                report,
            )?);

            for alias in &self.config.aliases {
                let asset = self.writer.write_png(&alias.file_name, alias.size)?;
                report(&asset);
                written.push(asset);
            }
        }

        print_summary(&written);
        tracing::info!(files = written.len(), "favicon generation finished");
        Ok(written)
    }
}

fn print_summary(written: &[WrittenAsset]) {
    println!();
    println!("All favicon files generated ({}):", written.len());
    for asset in written {
        println!("  - {}", asset);
    }
    println!(
        "Colors: badge {}, flag {}, pole {}",
        hex(BADGE_BLACK),
        hex(FLAG_RED),
        hex(POLE_GRAY)
    );
}
