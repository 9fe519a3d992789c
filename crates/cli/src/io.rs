use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;

/// Read the whole input, from `path` or from stdin when `path` is absent or `-`.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    read_input_from(path, std::io::stdin().lock())
}

/// Write `contents` plus a trailing newline, to `path` or to stdout.
pub fn write_output(path: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    write_output_to(path, contents, std::io::stdout().lock())
}

fn file_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| *p != Path::new("-"))
}

fn read_input_from(path: Option<&Path>, mut stdin: impl Read) -> anyhow::Result<String> {
    match file_path(path) {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output_to(
    path: Option<&Path>,
    contents: &str,
    mut stdout: impl Write,
) -> anyhow::Result<()> {
    match file_path(path) {
        Some(p) => std::fs::write(p, format!("{contents}\n"))
            .with_context(|| format!("failed to write {}", p.display())),
        None => {
            writeln!(stdout, "{contents}").context("failed to write stdout")?;
            Ok(())
        }
    }
}
