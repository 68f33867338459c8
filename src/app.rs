use crate::annotator::DatasetAnnotator;
use crate::classes::ClassRegistry;
use crate::config::Settings;
use crate::dataset;

use anyhow::Result;

/// What a single invocation does: build the sample dataset, or render the
/// annotations of an existing one.
#[derive(Debug, Clone, Copy)]
pub enum Mode {
    Create,
    Visualize,
}

impl TryFrom<String> for Mode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "visualize" => Ok(Self::Visualize),
            other => Err(format!(
                "{} is not a supported mode. Use either `create` or `visualize`.",
                other
            )),
        }
    }
}

pub async fn start_app(config: Settings, mode: Mode) -> Result<()> {
    match mode {
        Mode::Create => {
            dataset::create_dataset(&config.dataset, &config.download).await?;
            tracing::info!("dataset created at {}", config.dataset.root.display());
        }
        Mode::Visualize => {
            let registry = ClassRegistry::new();
            let annotator = DatasetAnnotator::new(&config.dataset, &config.render, registry);
            let summary = annotator.run()?;
            tracing::info!(
                "rendered {} images ({} failed) to {}",
                summary.processed,
                summary.failed,
                config.dataset.visualized_dir().display()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert!(matches!(Mode::try_from("Create".to_string()), Ok(Mode::Create)));
        assert!(matches!(
            Mode::try_from("visualize".to_string()),
            Ok(Mode::Visualize)
        ));
        assert!(Mode::try_from("train".to_string()).is_err());
    }
}
