/// Replay driver entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    let cli = replay::Cli::parse();
    if let Err(e) = replay::run(cli) {
        eprintln!("Replay error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod replay {
    use std::path::{Path, PathBuf};

    use wildmap::config::{AppConfig, ConfigError};
    use wildmap::replay::{ReplayError, ReplayScript, run_script};
    use wildmap::{AreaModel, DrawingView, format_grouped};

    /// Replay recorded drawing events and print the reported areas
    #[derive(clap::Parser, Debug)]
    #[command(name = "wildmap-replay", version, about)]
    pub struct Cli {
        /// JSON script of drawing events
        #[arg(value_hint = clap::ValueHint::FilePath)]
        pub script: PathBuf,

        /// Configuration file, defaults to the user config directory
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        pub config: Option<PathBuf>,

        /// Earth model for area: spherical, ellipsoidal or planar
        #[arg(short, long, value_parser = parse_area_model)]
        pub area_model: Option<AreaModel>,

        /// Write the effective configuration back before replaying
        #[arg(long)]
        pub save_config: bool,
    }

    fn parse_area_model(name: &str) -> Result<AreaModel, String> {
        serde_json::from_value(serde_json::Value::String(name.to_lowercase()))
            .map_err(|_| format!("unknown area model '{}'", name))
    }

    /// Save `config` to `path`, or to the default location when no path is given.
    pub fn persist_config(config: &AppConfig, path: Option<&Path>) -> Result<(), ConfigError> {
        match path {
            Some(path) => config.save(path),
            None => config.save_to_default_path(),
        }
    }

    pub fn run(cli: Cli) -> Result<(), ReplayError> {
        let mut config = match &cli.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::load_from_default_path().unwrap_or_default(),
        };
        if let Some(model) = cli.area_model {
            config.preferences.area_model = model;
        }

        env_logger::Builder::new()
            .filter_level(config.preferences.log_level.to_level_filter())
            .parse_default_env()
            .init();

        if cli.save_config {
            persist_config(&config, cli.config.as_deref())?;
        }

        let script = ReplayScript::load(&cli.script)?;
        let mut view = DrawingView::new(&config);
        let summary = run_script(&script, &mut view);

        for step in &summary.steps {
            match step.reported {
                Some(area) => println!(
                    "{:>4}  {:<18} {:>16} km²  ({} live)",
                    step.index,
                    step.kind,
                    format_grouped(area),
                    step.live_polygons
                ),
                None => println!(
                    "{:>4}  {:<18} {:>16}      ({} live)",
                    step.index, step.kind, "-", step.live_polygons
                ),
            }
        }

        println!();
        println!(
            "Selected area: {} ({})",
            view.panel.area_label(),
            config.preferences.area_model.name()
        );
        if summary.panel_visible {
            for section in view.panel.sections() {
                println!();
                println!("{}", section.title);
                for row in &section.rows {
                    println!("  {:<30} {:>16} {}*", row.label, row.value, row.unit);
                }
                println!("  *{}", section.footnote);
            }
        } else {
            println!("Area panel closed");
        }

        Ok(())
    }

}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
