// src/main.rs
//
// Calculatrice scientifique — point d’entrée
// ------------------------------------------
// - Par défaut : session texte interactive (stdin/stdout)
// - --gui      : fenêtre native (eframe::run_native)
// - Journal    : env_logger sur stderr (RUST_LOG=debug pour tout voir)
//
// Code de sortie 0 quand l’utilisateur choisit 0 (Exit) ou ferme le flux.

use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;

mod app;
mod config;
mod noyau;

use app::terminal::{self, Fin};
use app::AppCalc;
use config::Config;

/// Titre unique (fenêtre + journal).
const TITRE_APP: &str = "Scientific Calculator";

#[derive(Parser)]
#[command(name = "calculatrice")]
#[command(version)]
#[command(about = "Menu-driven scientific calculator", long_about = None)]
struct Cli {
    /// Configuration file (default: ./calculatrice.toml if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Decimal places for printed reals
    #[arg(short, long)]
    precision: Option<usize>,

    /// Also print the exact rational value of Legendre results
    #[arg(long)]
    exact: bool,

    /// Do not redisplay the menu before each choice
    #[arg(long)]
    no_menu: bool,

    /// Open the native window instead of the text session
    #[arg(long)]
    gui: bool,
}

impl Cli {
    /// Les options de ligne de commande priment sur le fichier.
    fn appliquer(&self, mut config: Config) -> Config {
        if let Some(p) = self.precision {
            config.precision = p;
        }
        if self.exact {
            config.exact = true;
        }
        if self.no_menu {
            config.afficher_menu = false;
        }
        config.bornee()
    }
}

/* ------------------------ Fenêtre ------------------------ */

fn lancer_fenetre(config: Config) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 560.0])
            .with_min_inner_size([420.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(&config)))),
    )
    .map_err(|e| anyhow!("native window failed: {e}"))
}

/* ------------------------ Entrée ------------------------ */

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::charger(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = cli.appliquer(config);
    log::debug!("{TITRE_APP} : {config:?}");

    if cli.gui {
        return lancer_fenetre(config);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut sortie = stdout.lock();

    let fin = terminal::lancer(stdin.lock(), &mut sortie, &config)
        .context("Terminal session failed")?;

    match fin {
        Fin::Sortie => log::info!("session terminée (exit)"),
        Fin::FinDeFlux => log::info!("session terminée (fin de l’entrée)"),
    }

    Ok(())
}
