mod logger;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use logger::CliLogger;
use pdf_compose::{ConversionSession, RawLayoutSettings, SkippedImage};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "img2pdf", about = "Combine JPEG and PNG images into one PDF", version)]
struct Cli {
    /// Input images, in page order
    #[arg(required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Output file name (".pdf" is appended when missing)
    #[arg(short, long)]
    output: Option<String>,

    /// Directory the PDF is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON settings file; flags on the command line take precedence
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the effective settings to a JSON file
    #[arg(long)]
    save_settings: Option<PathBuf>,

    /// Page size
    #[arg(long, value_enum)]
    page_size: Option<PageSizeArg>,

    /// Page orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Margin in mm (uniform on all sides)
    #[arg(long)]
    margin: Option<String>,

    /// Border style
    #[arg(long, value_enum)]
    border: Option<BorderArg>,

    /// Border color: #rrggbb, #rgb or r,g,b
    #[arg(long)]
    border_color: Option<String>,

    /// Border width in points
    #[arg(long)]
    border_width: Option<String>,

    /// Image fit mode
    #[arg(long, value_enum)]
    fit: Option<FitArg>,

    /// Images per page
    #[arg(long, value_enum)]
    spread: Option<SpreadArg>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Log every decoded image and rendered page
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    A4,
    Letter,
    Legal,
    Auto,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
    Auto,
}

#[derive(Clone, Copy, ValueEnum)]
enum BorderArg {
    None,
    Solid,
    Dashed,
    Shadow,
}

#[derive(Clone, Copy, ValueEnum)]
enum FitArg {
    Fit,
    Fill,
    Stretch,
}

#[derive(Clone, Copy, ValueEnum)]
enum SpreadArg {
    Single,
    Double,
}

impl From<PageSizeArg> for pdf_compose::PageSizePreset {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => Self::A4,
            PageSizeArg::Letter => Self::Letter,
            PageSizeArg::Legal => Self::Legal,
            PageSizeArg::Auto => Self::Auto,
        }
    }
}

impl From<OrientationArg> for pdf_compose::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
            OrientationArg::Auto => Self::Auto,
        }
    }
}

impl From<BorderArg> for pdf_compose::BorderStyle {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::None => Self::None,
            BorderArg::Solid => Self::Solid,
            BorderArg::Dashed => Self::Dashed,
            BorderArg::Shadow => Self::Shadow,
        }
    }
}

impl From<FitArg> for pdf_compose::ImageFit {
    fn from(arg: FitArg) -> Self {
        match arg {
            FitArg::Fit => Self::Fit,
            FitArg::Fill => Self::Fill,
            FitArg::Stretch => Self::Stretch,
        }
    }
}

impl From<SpreadArg> for pdf_compose::SpreadMode {
    fn from(arg: SpreadArg) -> Self {
        match arg {
            SpreadArg::Single => Self::Single,
            SpreadArg::Double => Self::Double,
        }
    }
}

impl Cli {
    /// Layout settings given as flags
    fn raw_settings(&self) -> RawLayoutSettings {
        RawLayoutSettings {
            page_size: self
                .page_size
                .map(|v| pdf_compose::PageSizePreset::from(v).to_string()),
            orientation: self
                .orientation
                .map(|v| pdf_compose::Orientation::from(v).to_string()),
            margin_mm: self.margin.clone(),
            border_style: self
                .border
                .map(|v| pdf_compose::BorderStyle::from(v).to_string()),
            border_color: self.border_color.clone(),
            border_width_pt: self.border_width.clone(),
            image_fit: self.fit.map(|v| pdf_compose::ImageFit::from(v).to_string()),
            spread_mode: self
                .spread
                .map(|v| pdf_compose::SpreadMode::from(v).to_string()),
        }
    }
}

/// The one stderr line reported for an image left out of the PDF
fn skipped_line(skipped: &SkippedImage) -> String {
    format!(
        "Skipped image {} ({}): {}",
        skipped.index + 1,
        skipped.name.as_deref().unwrap_or("<unnamed>"),
        skipped.reason
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::new(cli.verbose).init()?;

    let base = match &cli.settings {
        Some(path) => RawLayoutSettings::load(path)
            .await
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => RawLayoutSettings::default(),
    };
    let config = base.overlay(cli.raw_settings()).resolve()?;

    if let Some(path) = &cli.save_settings {
        config.to_raw().save(path).await?;
        println!("Settings saved → {}", path.display());
    }

    let mut session = ConversionSession::new(config);
    if let Some(name) = &cli.output {
        session.set_output_name(name.clone());
    }
    for path in &cli.input {
        session
            .add_path(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }

    let stats = session.statistics();
    println!("Conversion Statistics:");
    println!("  Images: {}", stats.images);
    println!("  Pages: {}", stats.pages);
    if stats.spreads > 0 || stats.trailing_single {
        println!("  Two-image spreads: {}", stats.spreads);
        if stats.trailing_single {
            println!("  Last page holds a single image");
        }
    }

    if cli.stats_only {
        return Ok(());
    }

    let output = session.convert().await?;
    for skipped in &output.skipped {
        eprintln!("{}", skipped_line(skipped));
    }

    let path = cli.out_dir.join(&output.filename);
    pdf_compose::save_pdf(&output.pdf, &path).await?;
    println!(
        "Converted {} page(s), {} image(s) skipped → {}",
        output.page_count,
        output.skipped.len(),
        path.display()
    );

    Ok(())
}
