//! src/config.rs
//!
//! Réglages (sans vue, sans noyau).
//!
//! - NATIF : fichier TOML optionnel (CALCULATRICE_CONFIG, sinon <config>/calculatrice_poche/config.toml)
//! - WEB   : valeurs par défaut
//!
//! Un fichier absent n’est pas une erreur. Un fichier illisible ou invalide l’est :
//! l’appelant journalise puis retombe sur les défauts.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::FormatAffichage;

/// Variable d’environnement : chemin explicite du fichier de réglages.
#[cfg(not(target_arch = "wasm32"))]
const VAR_CHEMIN: &str = "CALCULATRICE_CONFIG";

/// Garde-fou : chiffres après la virgule en notation exponentielle.
const CHIFFRES_EXP_MAX: usize = 20;

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin:?} impossible: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages invalides: {0}")]
    Format(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Reglages {
    pub separateur_milliers: char,
    pub seuil_exponentiel: f64,
    pub chiffres_exponentiel: usize,

    // fenêtre native
    pub largeur: f32,
    pub hauteur: f32,

    /// Filtre de journal par défaut (RUST_LOG a priorité).
    pub journal: String,
}

impl Default for Reglages {
    fn default() -> Self {
        let fmt = FormatAffichage::default();
        Self {
            separateur_milliers: fmt.separateur_milliers,
            seuil_exponentiel: fmt.seuil_exponentiel,
            chiffres_exponentiel: fmt.chiffres_exponentiel,
            largeur: 360.0,
            hauteur: 520.0,
            journal: "info".to_string(),
        }
    }
}

impl Reglages {
    /// Parse un texte TOML puis borne les valeurs absurdes.
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        let mut r: Reglages = toml::from_str(texte)?;

        if !(r.seuil_exponentiel.is_finite() && r.seuil_exponentiel > 0.0) {
            r.seuil_exponentiel = FormatAffichage::default().seuil_exponentiel;
        }
        r.chiffres_exponentiel = r.chiffres_exponentiel.min(CHIFFRES_EXP_MAX);

        Ok(r)
    }

    /// Paramètres du formateur d’affichage.
    pub fn format(&self) -> FormatAffichage {
        FormatAffichage {
            separateur_milliers: self.separateur_milliers,
            seuil_exponentiel: self.seuil_exponentiel,
            chiffres_exponentiel: self.chiffres_exponentiel,
        }
    }

    /* ------------------------ Chargement (natif) ------------------------ */

    #[cfg(not(target_arch = "wasm32"))]
    fn chemin() -> Option<PathBuf> {
        if let Some(p) = std::env::var_os(VAR_CHEMIN) {
            return Some(PathBuf::from(p));
        }
        dirs::config_dir().map(|d| d.join("calculatrice_poche").join("config.toml"))
    }

    /// Lit un fichier de réglages ; `Ok(None)` s’il n’existe pas.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn lire(chemin: &std::path::Path) -> Result<Option<Self>, ErreurConfig> {
        match std::fs::read_to_string(chemin) {
            Ok(texte) => Self::depuis_toml(&texte).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ErreurConfig::Lecture {
                chemin: chemin.to_path_buf(),
                source,
            }),
        }
    }

    /// Réglages effectifs : fichier s’il existe, sinon défauts.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger() -> Result<Self, ErreurConfig> {
        match Self::chemin() {
            Some(chemin) => Ok(Self::lire(&chemin)?.unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn charger() -> Result<Self, ErreurConfig> {
        Ok(Self::default())
    }
}
