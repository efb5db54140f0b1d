// File: crates/demo/src/main.rs
// Summary: Demo loads survival JSON, renders the initial variable, then replays each further
//          variable as a selector change, writing one SVG (and PNG with `png`) per step.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use survival_core::controller::DEFAULT_VARIABLE;
use survival_core::dataset::DEFAULT_DATA_PATH;
use survival_core::{theme, ChartController, ChartRenderer, JsonFileSource, RenderOptions, VariableSelector};

/// Settings from the command line and environment.
struct Config {
    data_path: PathBuf,
    variables: Vec<String>,
    out_dir: PathBuf,
    theme: String,
}

impl Config {
    /// `survival-demo [DATA_JSON] [VARIABLE...]`, plus `SURVIVAL_OUT_DIR` / `SURVIVAL_THEME`.
    fn from_env() -> Self {
        let mut args = std::env::args().skip(1);
        let data_path = args.next().unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()).into();
        let mut variables: Vec<String> = args.collect();
        if variables.is_empty() {
            variables.push(DEFAULT_VARIABLE.to_string());
        }
        Self {
            data_path,
            variables,
            out_dir: std::env::var("SURVIVAL_OUT_DIR").unwrap_or_else(|_| "target/out".to_string()).into(),
            theme: std::env::var("SURVIVAL_THEME").unwrap_or_else(|_| "light".to_string()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cfg = Config::from_env();
    println!("Using input file: {}", cfg.data_path.display());

    let opts = RenderOptions { theme: theme::find(&cfg.theme), ..RenderOptions::default() };
    let mut controller = ChartController::with_selector(opts, VariableSelector::new(cfg.variables[0].as_str()));
    controller
        .load(&JsonFileSource::new(&cfg.data_path))
        .with_context(|| format!("failed to load '{}'", cfg.data_path.display()))?;

    if let Some(data) = controller.data() {
        println!("Loaded {} observations; variables: {:?}", data.len(), controller.selector().options());
    }
    write_outputs(controller.renderer(), &cfg.out_dir, &cfg.variables[0])?;

    // Remaining variables play the role of dropdown changes.
    for variable in &cfg.variables[1..] {
        if let Some(outcome) = controller.on_change(variable) {
            println!(
                "Switched to `{variable}`: +{} created, {} updated, -{} removed",
                outcome.created, outcome.updated, outcome.removed
            );
        }
        write_outputs(controller.renderer(), &cfg.out_dir, variable)?;
    }
    Ok(())
}

fn write_outputs(chart: &ChartRenderer, out_dir: &Path, variable: &str) -> Result<()> {
    let svg = out_name(out_dir, variable, "svg");
    chart
        .render_to_svg(&svg)
        .with_context(|| format!("writing {}", svg.display()))?;
    println!("Wrote {} ({} curves)", svg.display(), chart.paths().len());

    #[cfg(feature = "png")]
    {
        let png = out_name(out_dir, variable, "png");
        survival_render_skia::SkiaRenderer::new().render_to_png(chart, &png)?;
        println!("Wrote {}", png.display());
    }
    Ok(())
}

/// Output file name like target/out/survival_<variable>.<ext>, keeping the name filesystem-safe.
fn out_name(out_dir: &Path, variable: &str, ext: &str) -> PathBuf {
    let safe: String = variable
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    out_dir.join(format!("survival_{safe}.{ext}"))
}
