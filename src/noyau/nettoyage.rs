// src/noyau/nettoyage.rs
//
// Normalisation de l’entrée brute avant évaluation.
// Ordre imposé :
//   (a) glyphes × ÷ -> * /
//   (b) ^ -> ** (puissance)
//   (c) retrait des opérateurs / point / % / espaces en fin de chaîne
//   (d) N% -> (N/100)
//   (e) liste blanche [0-9+\-*/().\s%xX]
//
// Fonction pure : aucun effet de bord.

use lazy_static::lazy_static;
use regex::Regex;

use super::erreur::{ErreurCalcul, ResultatCalcul};

lazy_static! {
    static ref FIN_INCOMPLETE: Regex = Regex::new(r"[+\-*/.%\s]+$").unwrap();
    static ref POURCENT: Regex = Regex::new(r"(\d+(?:\.\d+)?)%").unwrap();
    static ref AUTORISES: Regex = Regex::new(r"^[0-9+\-*/().\s%xX]+$").unwrap();
    static ref VARIABLE: Regex = Regex::new(r"[xX]").unwrap();
}

/// Nettoie une expression brute (sans séparateurs de milliers).
///
/// Retourne `ExpressionVide` si rien ne reste après le retrait de fin,
/// `CaractereInvalide` si un caractère hors liste blanche subsiste.
pub fn nettoyer(brut: &str) -> ResultatCalcul<String> {
    let s = brut.replace('×', "*").replace('÷', "/");
    let s = s.replace('^', "**");
    let s = FIN_INCOMPLETE.replace(&s, "");
    let s = POURCENT.replace_all(&s, "($1/100)");

    if s.is_empty() {
        return Err(ErreurCalcul::ExpressionVide);
    }
    if !AUTORISES.is_match(&s) {
        return Err(ErreurCalcul::CaractereInvalide(brut.to_string()));
    }
    Ok(s.into_owned())
}

/// Détecte le jeton variable (x ou X).
pub fn contient_variable(brut: &str) -> bool {
    VARIABLE.is_match(brut)
}
