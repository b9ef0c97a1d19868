mod common;

use common::{cell_source, nbkit, read_notebook, sample_notebook, write_notebook};
use serde_json::json;

const CORPUS: [(&str, &str); 3] = [
    ("01.00-Intro.ipynb", "Introduction"),
    ("01.01-Help.ipynb", "Help and Documentation"),
    ("02.00-NumPy.ipynb", "Introduction to NumPy"),
];

fn write_corpus(dir: &std::path::Path) {
    for (name, title) in CORPUS {
        write_notebook(dir, name, &sample_notebook(title));
    }
}

#[test]
fn injects_navbars_across_the_corpus() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    write_corpus(temp_dir.path());

    let status = nbkit()
        .arg("navigation")
        .arg("--notebook-dir")
        .arg(temp_dir.path())
        .status()
        .expect("run navigation");
    assert!(status.success());

    for (name, _) in CORPUS {
        let notebook = read_notebook(temp_dir.path(), name);
        let head = cell_source(&notebook, 1);
        assert!(head.starts_with("<!--NAVIGATION-->"), "{name} head: {head}");
        assert!(head.contains("[Contents](Index.ipynb)"));

        let cells = notebook["cells"].as_array().expect("cells array");
        let tail = cell_source(&notebook, cells.len() - 1);
        assert!(tail.starts_with("<!--NAVIGATION-->"), "{name} tail: {tail}");
    }

    let first = cell_source(&read_notebook(temp_dir.path(), CORPUS[0].0), 1);
    assert!(!first.contains("< ["));
    assert!(first.contains(" [Help and Documentation](01.01-Help.ipynb) >"));

    let middle = cell_source(&read_notebook(temp_dir.path(), CORPUS[1].0), 1);
    assert!(middle.contains("< [Introduction](01.00-Intro.ipynb) "));
    assert!(middle.contains(" [Introduction to NumPy](02.00-NumPy.ipynb) >"));

    let last = cell_source(&read_notebook(temp_dir.path(), CORPUS[2].0), 1);
    assert!(last.contains("< [Help and Documentation](01.01-Help.ipynb) "));
    assert!(!last.contains(") >"));
}

#[test]
fn second_navigation_run_is_byte_identical() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    write_corpus(temp_dir.path());

    for _ in 0..2 {
        let status = nbkit()
            .arg("navigation")
            .arg("--notebook-dir")
            .arg(temp_dir.path())
            .status()
            .expect("run navigation");
        assert!(status.success());
    }
    let after_second: Vec<String> = CORPUS
        .iter()
        .map(|(name, _)| std::fs::read_to_string(temp_dir.path().join(name)).expect("read"))
        .collect();

    let status = nbkit()
        .arg("navigation")
        .arg("--notebook-dir")
        .arg(temp_dir.path())
        .status()
        .expect("run navigation");
    assert!(status.success());

    for ((name, _), earlier) in CORPUS.iter().zip(&after_second) {
        let now = std::fs::read_to_string(temp_dir.path().join(name)).expect("read");
        assert_eq!(&now, earlier, "{name} changed on a repeat run");
    }
}

#[test]
fn navigation_aborts_on_a_malformed_document() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    write_corpus(temp_dir.path());
    // one cell only: no head slot for the navbar
    write_notebook(
        temp_dir.path(),
        "01.02-Short.ipynb",
        &json!({
            "cells": [
                {"cell_type": "markdown", "metadata": {}, "source": ["<!--BOOK_INFORMATION-->\n"]}
            ],
            "metadata": {},
            "nbformat": 4,
            "nbformat_minor": 4
        }),
    );

    let output = nbkit()
        .arg("navigation")
        .arg("--notebook-dir")
        .arg(temp_dir.path())
        .output()
        .expect("run navigation");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("01.02-Short.ipynb"), "stderr: {stderr}");
}

#[test]
fn kernelspec_normalization_pins_the_display_name() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let mut notebook = sample_notebook("Introduction");
    notebook["metadata"] = json!({"language_info": {"name": "python"}});
    write_notebook(temp_dir.path(), "01.00-Intro.ipynb", &notebook);

    let status = nbkit()
        .arg("kernelspec")
        .arg("--notebook-dir")
        .arg(temp_dir.path())
        .status()
        .expect("run kernelspec");
    assert!(status.success());

    let updated = read_notebook(temp_dir.path(), "01.00-Intro.ipynb");
    assert_eq!(
        updated["metadata"]["kernelspec"]["display_name"],
        json!("Python 3")
    );
    assert_eq!(
        updated["metadata"]["language_info"]["name"],
        json!("python")
    );

    let first_pass = std::fs::read_to_string(temp_dir.path().join("01.00-Intro.ipynb")).expect("read");
    let status = nbkit()
        .arg("kernelspec")
        .arg("--notebook-dir")
        .arg(temp_dir.path())
        .status()
        .expect("run kernelspec again");
    assert!(status.success());
    let second_pass = std::fs::read_to_string(temp_dir.path().join("01.00-Intro.ipynb")).expect("read");
    assert_eq!(first_pass, second_pass);
}
