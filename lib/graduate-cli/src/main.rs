#![allow(missing_docs, clippy::print_stdout)]
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use pico_args::Arguments;
use tracing::{Level, debug};

use graduate_core::{Layout, Source, diff_document, fetch, split_document};

const HELP: &str = "\
Split an OpenAPI document into per-topic files, or extract what it adds to a split baseline.

USAGE:
  graduate split <SOURCE> [--outdir <DIR>]
  graduate diff <SOURCE> --baseline <DIR> --outdir <DIR>

ARGS:
  <SOURCE>           URL (http, https, file) or path of the JSON/YAML document

OPTIONS:
  --outdir <DIR>     Output directory [split default: graduated]
  --baseline <DIR>   Directory of a previous split (diff only)
  --prefix <PREFIX>  Path segments preceding the topic [default: api/v1]
  -v, --verbose      Log every file read and written
  -h, --help         Print help
";

const DEFAULT_OUTDIR: &str = "graduated";

fn main() -> Result<()> {
    let Some(AppArgs {
        command,
        layout,
        verbose,
    }) = AppArgs::parse(Arguments::from_env()).context("parsing arguments")?
    else {
        print!("{HELP}");
        return Ok(());
    };

    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();
    debug!(topic_prefix = %layout.topic_prefix().join("/"), "layout");

    match command {
        Command::Split { source, outdir } => {
            let doc = fetch(&source).with_context(|| format!("loading {source}"))?;
            let report = split_document(&doc, &outdir, &layout)
                .with_context(|| format!("splitting into {}", outdir.display()))?;
            debug!(?report, "split report");
            println!("Split complete → {}", outdir.display());
        }
        Command::Diff {
            source,
            baseline,
            outdir,
        } => {
            let doc = fetch(&source).with_context(|| format!("loading {source}"))?;
            let report = diff_document(&doc, &baseline, &outdir, &layout).with_context(|| {
                format!(
                    "diffing against {} into {}",
                    baseline.display(),
                    outdir.display()
                )
            })?;
            debug!(?report, "diff report");
            println!("Difference written to → {}", outdir.display());
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Split {
        source: Source,
        outdir: PathBuf,
    },
    Diff {
        source: Source,
        baseline: PathBuf,
        outdir: PathBuf,
    },
}

#[derive(Debug)]
struct AppArgs {
    command: Command,
    layout: Layout,
    verbose: bool,
}

impl AppArgs {
    /// Returns `None` when help was requested.
    fn parse(mut pargs: Arguments) -> Result<Option<Self>> {
        if pargs.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let verbose = pargs.contains(["-v", "--verbose"]);
        let prefix: Option<Vec<String>> = pargs
            .opt_value_from_fn("--prefix", parse_prefix)
            .context("parsing prefix option")?;

        let command = match pargs.subcommand().context("parsing command")?.as_deref() {
            Some("split") => {
                let outdir = pargs
                    .opt_value_from_os_str("--outdir", parse_dir)
                    .context("parsing outdir option")?;
                let source = pargs.free_from_str().context("parsing source argument")?;
                Command::Split {
                    source,
                    outdir: outdir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTDIR)),
                }
            }
            Some("diff") => {
                let baseline = pargs
                    .value_from_os_str("--baseline", parse_dir)
                    .context("parsing baseline option")?;
                let outdir = pargs
                    .value_from_os_str("--outdir", parse_dir)
                    .context("parsing outdir option")?;
                let source = pargs.free_from_str().context("parsing source argument")?;
                Command::Diff {
                    source,
                    baseline,
                    outdir,
                }
            }
            Some(other) => bail!("unknown command '{other}', expected 'split' or 'diff'"),
            None => return Ok(None),
        };

        let remaining = pargs.finish();
        if !remaining.is_empty() {
            bail!("unexpected arguments: {remaining:?}");
        }

        let layout = match prefix {
            Some(prefix) => Layout::default().with_topic_prefix(prefix),
            None => Layout::default(),
        };

        Ok(Some(Self {
            command,
            layout,
            verbose,
        }))
    }
}

fn parse_prefix(value: &str) -> Result<Vec<String>, &'static str> {
    let segments: Vec<String> = value
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();
    if segments.is_empty() {
        return Err("prefix needs at least one segment");
    }
    Ok(segments)
}

fn parse_dir(value: &std::ffi::OsStr) -> Result<PathBuf, &'static str> {
    Ok(PathBuf::from(value))
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::Path;

    use assert2::let_assert;
    use rstest::rstest;

    use super::*;

    fn args(values: &[&str]) -> Arguments {
        Arguments::from_vec(values.iter().map(OsString::from).collect())
    }

    #[test]
    fn should_parse_split_with_default_outdir() {
        let_assert!(Ok(Some(app)) = AppArgs::parse(args(&["split", "https://api.example.com/openapi.json"])));

        let_assert!(Command::Split { source, outdir } = app.command);
        assert!(matches!(source, Source::Remote(_)));
        assert_eq!(outdir, Path::new("graduated"));
        assert_eq!(app.layout, Layout::default());
        assert!(!app.verbose);
    }

    #[test]
    fn should_parse_split_with_outdir() {
        let_assert!(Ok(Some(app)) = AppArgs::parse(args(&["split", "openapi.yaml", "--outdir", "out", "-v"])));

        let_assert!(Command::Split { source, outdir } = app.command);
        assert_eq!(source, Source::Local(PathBuf::from("openapi.yaml")));
        assert_eq!(outdir, Path::new("out"));
        assert!(app.verbose);
    }

    #[test]
    fn should_parse_diff() {
        let_assert!(
            Ok(Some(app)) = AppArgs::parse(args(&[
                "diff",
                "openapi.json",
                "--baseline",
                "graduated",
                "--outdir",
                "incoming",
                "--prefix",
                "/api/v2/",
            ]))
        );

        let_assert!(
            Command::Diff {
                baseline, outdir, ..
            } = app.command
        );
        assert_eq!(baseline, Path::new("graduated"));
        assert_eq!(outdir, Path::new("incoming"));
        assert_eq!(app.layout.topic_prefix(), ["api", "v2"]);
    }

    #[rstest]
    #[case::missing_baseline(&["diff", "openapi.json", "--outdir", "incoming"])]
    #[case::missing_outdir(&["diff", "openapi.json", "--baseline", "graduated"])]
    #[case::missing_source(&["split"])]
    #[case::unknown_command(&["merge", "openapi.json"])]
    #[case::extra_argument(&["split", "openapi.json", "extra"])]
    #[case::empty_prefix(&["split", "openapi.json", "--prefix", "/"])]
    fn should_reject_invalid_arguments(#[case] values: &[&str]) {
        assert!(AppArgs::parse(args(values)).is_err());
    }

    #[rstest]
    #[case::flag(&["--help"])]
    #[case::short_flag(&["split", "-h"])]
    #[case::no_command(&[])]
    fn should_request_help(#[case] values: &[&str]) {
        let_assert!(Ok(None) = AppArgs::parse(args(values)));
    }
}
