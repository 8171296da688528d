use std::fs;

use reckon::{evaluate, interpreter::value::core::Value};
use walkdir::WalkDir;

#[test]
fn book_examples_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_example_blocks(&content).into_iter().enumerate() {
            for line in code.lines().map(str::trim).filter(|line| !line.is_empty()) {
                count += 1;
                match evaluate(line) {
                    Ok(Value::Boolean(true)) => {},
                    Ok(other) => panic!("Example {} in {:?} did not hold:\n{}\nResult: {:?}",
                                        i + 1,
                                        path,
                                        line,
                                        other),
                    Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                                     i + 1,
                                     path,
                                     line,
                                     e),
                }
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Collects the contents of every ```reckon fenced block. Each non-empty line
/// of a block is a standalone expression that must evaluate to `true`.
fn extract_example_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```reckon") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
