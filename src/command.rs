//! Extractor command line and the `@files` source list.

use crate::config::FILE_LIST;
use crate::fs_util;
use crate::path_filter::PathSet;
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Separator for both the classpath and the source path.
pub const PATH_LIST_SEPARATOR: &str = ";";
pub const DOCLET_CLASS: &str = "com.microsoft.doclet.DocFxDoclet";
pub const SOURCE_ENCODING: &str = "UTF-8";

/// Arguments for one extractor run, in order.
///
/// `Display` renders them as a single command-line string, quoting any
/// argument that contains whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionCommand {
    args: Vec<String>,
}

impl ExtractionCommand {
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}

impl fmt::Display for ExtractionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if arg.contains(char::is_whitespace) {
                write!(f, "\"{arg}\"")?;
            } else {
                f.write_str(arg)?;
            }
        }
        Ok(())
    }
}

/// Builds the extractor arguments. Pure: the output depends only on the
/// inputs and their order, so callers sort `jars` and `input_paths` first.
///
/// The trailing `@files` argument points the tool at the list written by
/// [`write_file_list`] in the working directory; `-classpath` is left out
/// when there are no archives.
pub fn build_extraction_command(
    jars: &[PathBuf],
    extractor_path: &Path,
    input_paths: &[PathBuf],
    output_path: &Path,
) -> ExtractionCommand {
    let mut args = vec![
        "-encoding".to_string(),
        SOURCE_ENCODING.to_string(),
        "-docletpath".to_string(),
        extractor_path.display().to_string(),
        "-doclet".to_string(),
        DOCLET_CLASS.to_string(),
    ];

    if !jars.is_empty() {
        args.push("-classpath".to_string());
        args.push(join_paths(jars));
    }

    args.push("-sourcepath".to_string());
    args.push(join_paths(input_paths));
    args.push("-outputpath".to_string());
    args.push(output_path.display().to_string());
    args.push(format!("@{FILE_LIST}"));

    ExtractionCommand { args }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(PATH_LIST_SEPARATOR)
}

/// Writes every file with `extension` found under `paths` to `list_path`, one
/// per line, truncating whatever was there. Returns the number of lines.
///
/// Recursion follows [`PathSet::is_expanded`]: expanded sets are scanned one
/// directory at a time, plain root sets recursively. The listing is sorted
/// and de-duplicated, so overlapping roots never list a file twice.
pub fn write_file_list(list_path: &Path, paths: &PathSet, extension: &str) -> io::Result<usize> {
    let mut files = BTreeSet::new();
    for dir in paths.dirs() {
        let found = if paths.is_expanded() {
            fs_util::files_in_dir_by_extension(dir, extension)?
        } else {
            fs_util::files_by_extension(dir, extension)?
        };
        files.extend(found);
    }

    let mut writer = BufWriter::new(File::create(list_path)?);
    for file in &files {
        writeln!(writer, "{}", file.display())?;
    }
    writer.flush()?;
    Ok(files.len())
}
