use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::color::SeriesPalette;
use crate::config::PlotConfig;
use crate::data::loader::load_file;
use crate::data::model::{LogDocument, PlottedSeries};

// ---------------------------------------------------------------------------
// Plot session
// ---------------------------------------------------------------------------

/// Everything one plot window shows, independent of rendering.
pub struct PlotSession {
    pub config: PlotConfig,

    /// Log the current content was parsed from.
    pub source: Option<PathBuf>,

    pub document: LogDocument,

    /// Series derived from `document` (cached).
    pub series: Vec<PlottedSeries>,

    /// Colour per entry of `series`.
    pub colors: SeriesPalette,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl PlotSession {
    /// An empty session, nothing loaded.
    pub fn new(config: PlotConfig) -> Self {
        Self {
            config,
            source: None,
            document: LogDocument::default(),
            series: Vec::new(),
            colors: SeriesPalette::default(),
            status_message: None,
        }
    }

    /// Session for the log at `path`.
    pub fn open(config: PlotConfig, path: &Path) -> Result<Self> {
        let mut session = Self::new(config);
        session.load(path)?;
        Ok(session)
    }

    /// Replace the content with the log at `path`. On failure the previous
    /// content stays.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let document = load_file(path)?;
        self.set_document(path.to_path_buf(), document);
        Ok(())
    }

    /// Parse the current source again.
    pub fn reload(&mut self) -> Result<()> {
        let path = self.source.clone().context("no log file loaded")?;
        self.load(&path)
    }

    /// Ingest a parsed document and derive its series.
    pub fn set_document(&mut self, source: PathBuf, document: LogDocument) {
        self.series = document.series(&self.config);
        self.colors = SeriesPalette::new(self.series.len());

        log::info!(
            "Loaded {}: {} sections, {} series",
            source.display(),
            document.len(),
            self.series.len()
        );

        self.document = document;
        self.source = Some(source);
        self.status_message = None;
    }

    /// Window title: the log path, like the figure of the plot it replaces.
    pub fn window_title(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => "plotlog".to_string(),
        }
    }
}
