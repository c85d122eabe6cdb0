//! Jupyter notebook export for chat analysis turns.
//!
//! DESIGN
//! ======
//! The service keeps its generated notebook on its own host and only reports
//! the path, so the exported file is rebuilt client-side from the question
//! and the analysis narrative (nbformat 4, one markdown cell each, plus a
//! code cell pointing at the server-side artifact).

#[cfg(test)]
#[path = "notebook_test.rs"]
mod notebook_test;

use serde_json::{Value, json};

pub const NOTEBOOK_MIME: &str = "application/x-ipynb+json";
const DEFAULT_FILENAME: &str = "analysis.ipynb";

/// Serialize an nbformat-4 notebook for one question/answer pair.
pub fn build_notebook(query: &str, analysis: &str, artifact_path: Option<&str>) -> String {
    let mut cells = vec![
        markdown_cell(&format!("## {}", query.trim())),
        markdown_cell(analysis),
    ];
    if let Some(path) = artifact_path {
        cells.push(json!({
            "cell_type": "code",
            "execution_count": null,
            "metadata": {},
            "outputs": [],
            "source": source_lines(&format!("# Generated code saved to: {path}")),
        }));
    }
    let notebook = json!({
        "cells": cells,
        "metadata": {
            "kernelspec": { "display_name": "Python 3", "language": "python", "name": "python3" },
            "language_info": { "name": "python" }
        },
        "nbformat": 4,
        "nbformat_minor": 5,
    });
    serde_json::to_string_pretty(&notebook).unwrap_or_default()
}

/// Download filename derived from the service-side notebook path.
pub fn notebook_filename(path: &str) -> String {
    let base = path
        .rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .unwrap_or_default();
    if base.is_empty() {
        DEFAULT_FILENAME.to_owned()
    } else if base.to_ascii_lowercase().ends_with(".ipynb") {
        base.to_owned()
    } else {
        format!("{base}.ipynb")
    }
}

fn markdown_cell(text: &str) -> Value {
    json!({ "cell_type": "markdown", "metadata": {}, "source": source_lines(text) })
}

/// nbformat stores cell sources as a list of lines, each keeping its `\n`.
fn source_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}
