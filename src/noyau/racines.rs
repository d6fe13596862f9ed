// src/noyau/racines.rs
//
// Racine carrée et racine n-ième (réelles).
// - racine paire d’un négatif => hors domaine
// - racine impaire d’un négatif => signe conservé : ³√(-8) = -2

use lazy_static::lazy_static;
use regex::Regex;

use super::erreur::{ErreurCalcul, ErreurEvaluation, ResultatCalcul};

lazy_static! {
    static ref DEGRE: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

pub fn racine_carree(v: f64) -> ResultatCalcul<f64> {
    if v < 0.0 {
        return Err(ErreurCalcul::Domaine(format!("√({v}) : radicande négatif")));
    }
    fini(v.sqrt())
}

pub fn racine_nieme(v: f64, n: u32) -> ResultatCalcul<f64> {
    if n == 0 {
        return Err(ErreurCalcul::SaisieNonNumerique("0".into()));
    }
    if n % 2 == 0 && v < 0.0 {
        return Err(ErreurCalcul::Domaine(format!(
            "{n}√({v}) : racine paire d’un négatif"
        )));
    }
    let r = v.abs().powf(1.0 / f64::from(n));
    fini(if v < 0.0 { -r } else { r })
}

/// Réponse d’invite « degré de la racine » : entier strictement positif.
pub fn lire_degre(saisie: &str) -> ResultatCalcul<u32> {
    let s = saisie.trim();
    if !DEGRE.is_match(s) {
        return Err(ErreurCalcul::SaisieNonNumerique(s.to_string()));
    }
    match s.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ErreurCalcul::SaisieNonNumerique(s.to_string())),
    }
}

fn fini(v: f64) -> ResultatCalcul<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurEvaluation::NonFinie.into())
    }
}
