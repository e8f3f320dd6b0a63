use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use skyline_art::prelude::*;
use skyline_engine::logging::{LoggingConfig, init_logging};
use skyline_engine::render::Pixmap;

const DEFAULT_OUTPUT: &str = "skyline.png";

const FONT_CANDIDATES: [&str; 5] = [
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Studio settings.
///
/// `skyline-studio [OUTPUT]`. The output path falls back to `SKYLINE_OUTPUT`,
/// then `skyline.png`. `SKYLINE_FONT` puts a font ahead of the system
/// candidates and `SKYLINE_LOG` sets the log filter.
#[derive(Debug, Clone)]
struct StudioOptions {
    output: PathBuf,
    fonts: Vec<PathBuf>,
    log_filter: Option<String>,
}

impl Default for StudioOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            fonts: FONT_CANDIDATES.into_iter().map(PathBuf::from).collect(),
            log_filter: None,
        }
    }
}

impl StudioOptions {
    fn output(mut self, v: impl Into<PathBuf>) -> Self { self.output = v.into(); self }
    fn prefer_font(mut self, v: impl Into<PathBuf>) -> Self { self.fonts.insert(0, v.into()); self }
    fn log_filter(mut self, v: impl Into<String>) -> Self { self.log_filter = Some(v.into()); self }

    fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(path) = std::env::var("SKYLINE_OUTPUT") {
            opts = opts.output(path);
        }
        if let Some(path) = std::env::args_os().nth(1) {
            opts = opts.output(path);
        }
        if let Ok(path) = std::env::var("SKYLINE_FONT") {
            opts = opts.prefer_font(path);
        }
        if let Ok(filter) = std::env::var("SKYLINE_LOG") {
            opts = opts.log_filter(filter);
        }
        opts
    }
}

fn main() -> Result<()> {
    let opts = StudioOptions::from_env();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &opts.log_filter {
        logging = logging.filter(filter.clone());
    }
    init_logging(logging);

    let mut fonts = FontSystem::new();
    let font = load_font(&mut fonts, &opts.fonts);

    let mut list = DrawList::new();
    {
        let painter = Painter::new(&mut list);
        let mut painter = match font {
            Some(id) => painter.font(&fonts, id),
            None => painter,
        };
        render_background(&mut painter);
    }
    log::info!("recorded {} draw commands", list.len());

    let mut rasterizer = Rasterizer::new(RasterConfig::default().viewport(CANVAS));
    let pixmap = rasterizer.render(&mut list, Some(&fonts)).context("rasterizing the background")?;
    if rasterizer.skipped() > 0 {
        log::warn!("{} degenerate commands skipped", rasterizer.skipped());
    }

    save_png(&pixmap, &opts.output)?;
    log::info!("wrote {}", opts.output.display());
    Ok(())
}

/// Loads the first readable candidate. Text falls back to estimated widths and
/// is not drawn when none loads.
fn load_font(fonts: &mut FontSystem, candidates: &[PathBuf]) -> Option<FontId> {
    for path in candidates {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        match fonts.load_font(&bytes) {
            Ok(id) => {
                log::info!("using font {}", path.display());
                return Some(id);
            }
            Err(e) => log::warn!("{}: {e}", path.display()),
        }
    }
    log::warn!("no usable font found; sign text will be skipped");
    None
}

fn save_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let image = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .context("pixel buffer does not match the pixmap size")?;
    image.save(path).with_context(|| format!("writing {}", path.display()))
}
