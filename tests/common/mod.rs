//! Shared test infrastructure for integration tests.

use serde_json::{json, Value};
use std::path::Path;
use std::process::Command;

/// Command handle for the built binary.
pub fn nbkit() -> Command {
    Command::new(env!("CARGO_BIN_EXE_nbkit"))
}

/// A minimal well-formed corpus notebook: book-info cell plus one heading cell.
pub fn sample_notebook(title: &str) -> Value {
    json!({
        "cells": [
            {
                "cell_type": "markdown",
                "metadata": {},
                "source": ["<!--BOOK_INFORMATION-->\n", "*This notebook accompanies the book.*"]
            },
            {
                "cell_type": "markdown",
                "metadata": {},
                "source": [format!("# {title}\n")]
            }
        ],
        "metadata": {
            "kernelspec": {
                "display_name": "Python 3",
                "language": "python",
                "name": "python3"
            }
        },
        "nbformat": 4,
        "nbformat_minor": 4
    })
}

pub fn write_notebook(dir: &Path, name: &str, notebook: &Value) {
    let content = serde_json::to_string_pretty(notebook).expect("serialize notebook");
    std::fs::write(dir.join(name), content).expect("write notebook");
}

pub fn read_notebook(dir: &Path, name: &str) -> Value {
    let content = std::fs::read_to_string(dir.join(name)).expect("read notebook");
    serde_json::from_str(&content).expect("parse notebook")
}

/// Cell source as one string, whether stored as a string or a line list
/// (used by the navigation test).
#[allow(dead_code)]
pub fn cell_source(notebook: &Value, index: usize) -> String {
    match &notebook["cells"][index]["source"] {
        Value::String(text) => text.clone(),
        Value::Array(lines) => lines
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .concat(),
        other => panic!("unexpected source shape: {other}"),
    }
}
