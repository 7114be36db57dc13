//! Convert command - translate points between pick-points XML and AnyScript.

use crate::config::AnyppConfig;
use anyhow::{Context, Result};
use anypp_convert::registry;
use clap::{Args, ValueEnum};
use std::io::{BufRead, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Rule printed under each section banner.
const BANNER_RULE: &str = "================================";

/// Convert command arguments
#[derive(Args)]
pub struct ConvertArgs {
    /// Input file, use - for stdin (omit to paste lines interactively)
    pub input: Option<PathBuf>,

    /// Source format (auto-detected from the content otherwise)
    #[arg(short, long)]
    pub from: Option<SourceFormat>,

    /// Target format, repeat for several (defaults depend on the source)
    #[arg(short, long)]
    pub to: Vec<TargetFormat>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SourceFormat {
    /// MeshLab pick-points XML
    Pickpoints,
    /// AnyScript lines with `{x, y, z}` values
    Anyscript,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TargetFormat {
    /// MeshLab `<point>` elements
    Pickpoints,
    /// AnyScript point-cloud rows
    AnyscriptPointcloud,
    /// AnyScript `AnyFloat` declarations
    AnyscriptDeclarations,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Pickpoints => "pickpoints",
            SourceFormat::Anyscript => "anyscript",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TargetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::Pickpoints => "pickpoints",
            TargetFormat::AnyscriptPointcloud => "anyscript-pointcloud",
            TargetFormat::AnyscriptDeclarations => "anyscript-declarations",
        }
    }
}

impl std::fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered target.
#[derive(Debug)]
pub struct Section {
    pub title: &'static str,
    pub text: String,
}

/// Output of a conversion, one section per target.
#[derive(Debug)]
pub struct Conversion {
    pub source_format: &'static str,
    pub point_count: usize,
    pub sections: Vec<Section>,
}

impl Conversion {
    /// Join the sections. Banners are only printed when there is more than one.
    pub fn render(&self, banners: bool) -> String {
        let banners = banners && self.sections.len() > 1;
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if banners {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(section.title);
                out.push_str(":\n");
                out.push_str(BANNER_RULE);
                out.push('\n');
            }
            out.push_str(&section.text);
        }
        out
    }
}

/// Convert `content` into each of `targets`.
///
/// With no `from`, the first registered reader that recognises the content
/// is used. With no targets, the configured defaults for the source apply.
pub fn convert(
    content: &str,
    from: Option<&str>,
    targets: &[&str],
    config: &AnyppConfig,
) -> Result<Conversion> {
    let (reader, points) = match from {
        Some(format) => {
            let reader = registry::reader_for_format(format).with_context(|| {
                format!(
                    "no reader available for format: {format} (available: {})",
                    available_readers()
                )
            })?;
            let points = reader
                .read(content)
                .with_context(|| format!("failed to read input as {format}"))?;
            (reader, points)
        }
        None => registry::read_detected(content).context(
            "input is neither a pick-points file nor AnyScript lines (use --from to force a format)",
        )?,
    };
    let source_format = reader.format();
    debug!(format = source_format, points = points.len(), "read input");
    if points.is_empty() {
        warn!(format = source_format, "no points found in input");
    }
    let with_nan = points.iter().filter(|(_, point)| point.has_nan()).count();
    if with_nan > 0 {
        debug!(count = with_nan, "points with nan components");
    }

    let targets: Vec<String> = if targets.is_empty() {
        config.convert.targets_for(source_format)
    } else {
        targets.iter().map(|t| t.to_string()).collect()
    };
    if targets.is_empty() {
        anyhow::bail!("no target formats configured for {source_format}");
    }

    let sections = targets
        .iter()
        .map(|target| {
            let writer = registry::writer_for_format(target).with_context(|| {
                format!(
                    "no writer available for format: {target} (available: {})",
                    available_writers()
                )
            })?;
            Ok(Section {
                title: writer.title(),
                text: writer.write(&points),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Conversion {
        source_format,
        point_count: points.len(),
        sections,
    })
}

/// Source format implied by a file extension, such as `pp` for pick-points.
pub fn format_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    registry::reader_for_extension(ext).map(|reader| reader.format())
}

fn available_readers() -> String {
    registry::readers()
        .iter()
        .map(|r| format!("{} (.{})", r.format(), r.extensions().join(", .")))
        .collect::<Vec<_>>()
        .join(", ")
}

fn available_writers() -> String {
    registry::writers()
        .iter()
        .map(|w| format!("{} (.{})", w.format(), w.extension()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read pasted lines up to the first empty line.
///
/// Empty lines before any content are skipped.
pub fn read_pasted(input: impl BufRead) -> std::io::Result<String> {
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn read_input(input: Option<&Path>) -> Result<String> {
    if let Some(path) = input.filter(|p| p.as_os_str() != "-") {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let stdin = std::io::stdin();
    if input.is_none() && stdin.is_terminal() {
        eprintln!("Paste pp file or anyscript lines (finish with an empty line):");
        return read_pasted(stdin.lock()).context("failed to read pasted lines");
    }

    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}

/// Run the convert command
pub fn run(args: ConvertArgs, config: &AnyppConfig) -> Result<()> {
    let content = read_input(args.input.as_deref())?;
    let targets: Vec<&str> = args.to.iter().map(TargetFormat::as_str).collect();
    let from = args
        .from
        .map(|f| f.as_str())
        .or_else(|| args.input.as_deref().and_then(format_for_path));

    let conversion = convert(&content, from, &targets, config)?;
    let output = conversion.render(config.convert.banners());

    match args.output {
        Some(path) => {
            std::fs::write(&path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), points = conversion.point_count, "wrote output");
            eprintln!(
                "Converted {} points ({}) -> {}",
                conversion.point_count,
                conversion.source_format,
                path.display()
            );
        }
        None => print!("{output}"),
    }
    Ok(())
}
