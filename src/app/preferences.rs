//! src/app/preferences.rs
//!
//! Préférences d’affichage (thème + échelle), persistées par le stockage eframe
//! (fichier en natif, localStorage en web). Seules ces préférences survivent
//! à un redémarrage : l’historique, lui, n’est jamais écrit.

use serde::{Deserialize, Serialize};

/// Clé unique dans le stockage eframe.
pub const CLE_PREFERENCES: &str = "calculatrice_historique.preferences";

/// Échelles proposées par les boutons de taille.
pub const ECHELLES: [f32; 5] = [0.8, 0.9, 1.0, 1.1, 1.25];

const ECHELLE_DEFAUT: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub mode_sombre: bool,
    pub echelle: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            mode_sombre: false,
            echelle: ECHELLE_DEFAUT,
        }
    }
}

impl Preferences {
    /// Lecture au démarrage ; absent ou illisible => défauts.
    pub fn charger(stockage: Option<&dyn eframe::Storage>) -> Self {
        let lues: Option<Self> = stockage.and_then(|s| eframe::get_value(s, CLE_PREFERENCES));
        match lues {
            Some(p) => Self {
                echelle: echelle_proche(p.echelle),
                ..p
            },
            None => Self::default(),
        }
    }

    pub fn enregistrer(&self, stockage: &mut dyn eframe::Storage) {
        eframe::set_value(stockage, CLE_PREFERENCES, self);
    }

    pub fn basculer_theme(&mut self) {
        self.mode_sombre = !self.mode_sombre;
    }

    pub fn choisir_echelle(&mut self, echelle: f32) {
        self.echelle = echelle_proche(echelle);
    }
}

/// Ramène une échelle quelconque sur la plus proche des échelles proposées.
pub fn echelle_proche(v: f32) -> f32 {
    if !v.is_finite() {
        return ECHELLE_DEFAUT;
    }
    ECHELLES
        .iter()
        .copied()
        .min_by(|a, b| (a - v).abs().total_cmp(&(b - v).abs()))
        .unwrap_or(ECHELLE_DEFAUT)
}
