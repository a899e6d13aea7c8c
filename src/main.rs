use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use memegen::caption::{Compositor, GlyphFont, RenderRequest, StyleFields, Typeface, VariantKey};
use memegen::config::Config;
use memegen::image_ops::Background;
use memegen::store::ImageStore;

/// Memegen - render captioned template images
#[derive(Parser, Debug)]
#[command(name = "memegen")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a captioned image and store it
    Render(RenderArgs),
    /// Print the variant key a render would be stored under
    Key(KeyArgs),
}

#[derive(Args, Debug)]
struct KeyArgs {
    /// Template identifier
    #[arg(long)]
    template: String,

    /// Encoded text path, e.g. "top_line/bottom_line"
    #[arg(long)]
    text_path: String,

    /// Alternate template style
    #[arg(long)]
    style: Option<String>,

    /// Font name recorded in the variant key; `render` defaults it to the font file stem
    #[arg(long)]
    font_name: Option<String>,

    /// Exact output width
    #[arg(long)]
    width: Option<u32>,

    /// Exact output height
    #[arg(long)]
    height: Option<u32>,

    /// Watermark text
    #[arg(long)]
    watermark: Option<String>,
}

impl KeyArgs {
    fn variant_key(&self) -> VariantKey {
        self.variant_key_with_font(self.font_name.clone())
    }

    fn variant_key_with_font(&self, font: Option<String>) -> VariantKey {
        let fields = StyleFields {
            style: self.style.clone(),
            font,
            watermark: self.watermark.clone(),
            width: self.width,
            height: self.height,
        };
        VariantKey::derive(&self.template, &self.text_path, &fields)
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    key: KeyArgs,

    /// Background image file
    #[arg(long)]
    background: PathBuf,

    /// Caption font file (TrueType/OpenType)
    #[arg(long)]
    font: PathBuf,

    /// Top caption text
    #[arg(long, default_value = "")]
    top: String,

    /// Bottom caption text
    #[arg(long, default_value = "")]
    bottom: String,

    /// Watermark font file; the embedded font is used when omitted
    #[arg(long)]
    watermark_font: Option<PathBuf>,
}

impl RenderArgs {
    /// Key for this render; the drawing font always takes part in it.
    fn variant_key(&self) -> VariantKey {
        let font_name = self.key.font_name.clone().or_else(|| {
            self.font
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        });
        self.key.variant_key_with_font(font_name)
    }
}

fn load_font(path: &Path) -> anyhow::Result<Arc<dyn Typeface>> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read font {}", path.display()))?;
    let font = GlyphFont::from_bytes(data)
        .with_context(|| format!("Failed to load font {}", path.display()))?;
    Ok(Arc::new(font))
}

async fn render(config: Config, args: RenderArgs) -> anyhow::Result<()> {
    let key = args.variant_key();

    let data = tokio::fs::read(&args.background)
        .await
        .with_context(|| format!("Failed to read background {}", args.background.display()))?;
    let background = Arc::new(Background::decode(&data)?);
    let font = load_font(&args.font)?;

    let mut request = RenderRequest::new(background, font)
        .with_top(args.top)
        .with_bottom(args.bottom);
    if let Some(width) = args.key.width {
        request = request.with_width(width);
    }
    if let Some(height) = args.key.height {
        request = request.with_height(height);
    }
    if let Some(watermark) = &args.key.watermark {
        request = request.with_watermark(watermark.clone());
    }
    if let Some(path) = &args.watermark_font {
        request = request.with_watermark_font(load_font(path)?);
    }

    let compositor = Compositor::new(config.render)?
        .with_span(tracing::info_span!("render", key = %key));
    let rendered = tokio::task::spawn_blocking(move || compositor.render(&request))
        .await
        .context("Render task panicked")??;

    let store = ImageStore::new(config.images_root);
    let path = store.save(&key, &rendered).await?;
    println!("{}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => Config::default(),
    };

    memegen::logging::init_subscriber(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging subsystem: {}", e))?;

    match cli.command {
        Command::Key(args) => {
            println!("{}", args.variant_key());
            Ok(())
        }
        Command::Render(args) => render(config, args).await,
    }
}
