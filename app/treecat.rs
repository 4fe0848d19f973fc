//! Command-line interface for treecat.
//!
//! Walks a directory tree and concatenates every matched file into stdout or
//! an output file. Usage errors and `--help` exit with code 1; a run with
//! zero matches is not a failure.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treecat::{TreecatBuilder, TreecatOptions, treecat};

/// treecat — concatenate a directory tree into one stream
#[derive(Parser)]
#[command(name = "treecat", about, long_about = None)]
struct Cli {
    /// File extension to match ("*" for all), or a directory to scan
    #[arg(value_name = "file_extension")]
    file_extension: Option<String>,

    /// Output file (stdout if omitted)
    #[arg(value_name = "output_file")]
    output_file: Option<PathBuf>,

    /// Recurse into subdirectories, descending up to N extra levels
    #[arg(
        short = 'd',
        long = "depth",
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "1"
    )]
    depth: Option<String>,

    /// Comma-separated list of file extensions to exclude
    #[arg(short = 'e', long = "exclude", value_name = "ext,...", value_delimiter = ',')]
    exclude: Vec<String>,

    /// Comma-separated list of exclusion patterns (name, path, glob,
    /// dir/*, dir/**, !path)
    #[arg(
        short = 'E',
        long = "exclude-dir",
        value_name = "pattern,...",
        value_delimiter = ','
    )]
    exclude_dir: Vec<String>,

    /// Include binary files
    #[arg(short = 'b', long = "binary")]
    binary: bool,
}

impl Cli {
    fn into_options(self) -> TreecatOptions {
        let mut root = PathBuf::from(".");
        let mut file_type = "*".to_string();
        let mut output = None;
        match (self.file_extension, self.output_file) {
            // A lone positional naming a directory moves the scan root.
            (Some(arg), None) if PathBuf::from(&arg).is_dir() => root = PathBuf::from(arg),
            (Some(ext), out) => {
                file_type = ext;
                output = out;
            }
            (None, out) => output = out,
        }
        let mut builder = TreecatBuilder::new(root)
            .file_type(file_type)
            .exclude_types(self.exclude)
            .exclude_patterns(self.exclude_dir)
            .include_binary(self.binary);
        if let Some(depth) = self.depth {
            // An unparsable depth falls back to 1 rather than failing.
            builder = builder.max_depth(depth.parse().unwrap_or(1));
        }
        if let Some(path) = output {
            builder = builder.output(path);
        }
        builder.build()
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            exit(1);
        }
    };
    let options = cli.into_options();
    match treecat(&options) {
        Ok(report) => {
            if !report.found() {
                if options.file_type == "*" {
                    eprintln!("Warning: No files found.");
                } else {
                    eprintln!("Warning: No files matching *.{} found.", options.file_type);
                }
            } else if let Some(path) = &options.output {
                eprintln!(
                    "All matching files have been concatenated into {}",
                    path.display()
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
