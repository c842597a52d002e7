use super::{convert, load_image};
use crate::config::LayoutConfig;
use crate::stats::calculate_statistics;
use crate::types::*;
use std::path::Path;

/// The images, settings and output name of one conversion, owned by the
/// caller.
///
/// Adding, removing and reordering images are plain method calls; nothing is
/// decoded until [`ConversionSession::convert`].
#[derive(Debug, Clone, Default)]
pub struct ConversionSession {
    images: Vec<ImageInput>,
    config: LayoutConfig,
    output_name: Option<String>,
}

impl ConversionSession {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            images: Vec::new(),
            config,
            output_name: None,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    pub fn set_output_name(&mut self, name: impl Into<String>) {
        self.output_name = Some(name.into());
    }

    pub fn images(&self) -> &[ImageInput] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Append an image
    pub fn add(&mut self, input: ImageInput) {
        self.images.push(input);
    }

    /// Read a file and append it
    pub async fn add_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let input = load_image(path).await?;
        self.images.push(input);
        Ok(())
    }

    /// Remove the image at `index`, if there is one
    pub fn remove(&mut self, index: usize) -> Option<ImageInput> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Move the image at `from` so it ends up at `to`.
    ///
    /// Returns `false` and leaves the order unchanged when either index is
    /// out of range.
    pub fn move_image(&mut self, from: usize, to: usize) -> bool {
        if from >= self.images.len() || to >= self.images.len() {
            return false;
        }
        let image = self.images.remove(from);
        self.images.insert(to, image);
        true
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    /// Statistics for the current images, assuming they all decode
    pub fn statistics(&self) -> ConversionStatistics {
        calculate_statistics(self.images.len(), &self.config)
    }

    /// Convert the current images into a PDF
    pub async fn convert(&self) -> Result<ConversionOutput> {
        convert(&self.images, &self.config, self.output_name.as_deref()).await
    }
}
