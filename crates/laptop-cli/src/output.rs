//! stdout rendering: templates by default, view models as JSON with `--json`.
use anyhow::Context;
use laptop_core::{CandidateRecord, ComparisonResult, ServiceMetrics};
use laptop_out::{ComparisonView, ListView, MetricsView, Presenter};
use laptop_shaping::ShapedList;
use serde::Serialize;
use std::io::Write;

pub struct Printer {
    presenter: Presenter,
    json: bool,
}

impl Printer {
    pub fn new(presenter: Presenter, json: bool) -> Self {
        Self { presenter, json }
    }

    pub fn candidates(&self, list: &ShapedList) -> anyhow::Result<()> {
        if self.json {
            return self.emit_json(&ListView::from(list));
        }
        self.line(&self.presenter.candidates(list)?)
    }

    /// A single catalog row, shown like a one-item list
    pub fn record(&self, record: CandidateRecord) -> anyhow::Result<()> {
        self.candidates(&ShapedList::keyed_only(vec![record]))
    }

    pub fn comparison(&self, result: &ComparisonResult) -> anyhow::Result<()> {
        if self.json {
            return self.emit_json(&ComparisonView::from(result));
        }
        self.line(&self.presenter.comparison(result)?)
    }

    pub fn metrics(&self, metrics: &ServiceMetrics) -> anyhow::Result<()> {
        if self.json {
            return self.emit_json(&MetricsView::from(metrics));
        }
        self.line(&self.presenter.metrics(metrics)?)
    }

    pub fn line(&self, text: &str) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text.trim_end()).context("failed to write to stdout")
    }

    fn emit_json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
        self.line(&text)
    }
}
