//! Configuration (calculatrice.toml)
//!
//! Fichier optionnel : `--config <chemin>`, sinon `./calculatrice.toml` s’il existe,
//! sinon valeurs par défaut. Les options de ligne de commande priment.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Nom du fichier cherché dans le répertoire courant.
pub const FICHIER_CONFIG: &str = "calculatrice.toml";

/// Précision par défaut (décimales), comme `%lf`.
pub const PRECISION_DEFAUT: usize = 6;

/// Garde-fou : au-delà, les chiffres affichés ne sont que du bruit f64.
pub const PRECISION_MAX: usize = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Décimales des réels affichés.
    pub precision: usize,

    /// Ligne « Exact: … » pour Legendre quand x est un décimal fini / une fraction.
    pub exact: bool,

    /// Réafficher le menu avant chaque choix.
    pub afficher_menu: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: PRECISION_DEFAUT,
            exact: false,
            afficher_menu: true,
        }
    }
}

impl Config {
    /// Charge un fichier précis (erreur s’il n’existe pas).
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Chemin explicite, sinon `./calculatrice.toml` s’il existe, sinon défauts.
    pub fn charger(chemin: Option<&Path>) -> ConfigResult<Self> {
        if let Some(p) = chemin {
            return Self::load(p);
        }

        let local = Path::new(FICHIER_CONFIG);
        if local.exists() {
            log::debug!("configuration trouvée : {}", local.display());
            return Self::load(local);
        }

        Ok(Self::default())
    }

    pub fn parse(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config.bornee())
    }

    /// Précision ramenée dans [0, PRECISION_MAX].
    pub fn bornee(mut self) -> Self {
        if self.precision > PRECISION_MAX {
            log::warn!(
                "précision {} trop grande, ramenée à {PRECISION_MAX}",
                self.precision
            );
            self.precision = PRECISION_MAX;
        }
        self
    }
}
