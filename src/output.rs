//! Output formatting and display utilities

use crate::config::{OutputConfig, OutputView};
use crate::error::Result;
use crate::request::ParsedRequest;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Output writer that handles file vs stdout
pub struct OutputWriter {
    config: OutputConfig,
}

impl OutputWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render a parsed request as JSON in the configured view
    pub fn render(&self, request: &ParsedRequest) -> Result<String> {
        let value = match self.config.view {
            OutputView::Full => serde_json::to_value(request)?,
            OutputView::Requests => serde_json::to_value(request.for_requests())?,
        };

        let mut rendered = if self.config.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        rendered.push('\n');
        Ok(rendered)
    }

    /// Write a parsed request to the configured output
    pub fn write(&self, request: &ParsedRequest) -> Result<()> {
        let content = self.render(request)?;
        if let Some(file_path) = &self.config.file {
            self.write_to_file(&content, file_path)
        } else {
            self.write_to_stdout(&content)
        }
    }

    fn write_to_file(&self, content: &str, file_path: &Path) -> Result<()> {
        let mut file = File::create(file_path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_to_stdout(&self, content: &str) -> Result<()> {
        io::stdout().write_all(content.as_bytes())?;
        Ok(())
    }
}
