// src/noyau/format.rs

use lazy_static::lazy_static;
use num_complex::Complex64;
use num_traits::Zero;
use regex::{Captures, Regex};

lazy_static! {
    static ref LITTERAL: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
}

/* ------------------------ Sentinelles d’affichage ------------------------ */

pub const SENTINELLE_ERREUR: &str = "Error";
pub const SENTINELLE_INFINIE: &str = "Infinite";
pub const SENTINELLE_AUCUNE: &str = "No solution";

/// Vrai si le tampon affiche une sentinelle plutôt qu’une expression.
pub fn est_sentinelle(texte: &str) -> bool {
    matches!(
        texte,
        SENTINELLE_ERREUR | SENTINELLE_INFINIE | SENTINELLE_AUCUNE
    )
}

/* ------------------------ Résultat numérique ------------------------ */

/// Formate un résultat :
/// - entier => sans décimales
/// - sinon => arrondi à 10 décimales, zéros finaux retirés
/// - ±∞ / NaN => "Infinity" / "-Infinity" / "NaN"
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v.fract() == 0.0 {
        return format_court(v);
    }

    // arrondi à 10 décimales puis relecture : retire les zéros finaux
    let arrondi: f64 = format!("{v:.10}").parse().unwrap_or(v);
    format_court(arrondi)
}

/// Écriture décimale développée la plus courte qui relit le même flottant.
/// Jamais d’exposant : le texte repasse la liste blanche du nettoyage. -0 s’écrit 0.
fn format_court(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Racine complexe : "re + imi" / "re - imi" (partie imaginaire nulle => réel seul).
pub fn format_complexe(c: Complex64) -> String {
    let re = format_resultat(c.re);
    if c.im.is_zero() {
        return re;
    }
    let im = format_resultat(c.im.abs());
    if c.im < 0.0 {
        format!("{re} - {im}i")
    } else {
        format!("{re} + {im}i")
    }
}

/* ------------------------ Séparateurs de milliers ------------------------ */

/// Insère des séparateurs de milliers dans la partie entière.
/// Intouché : "Infinity", "NaN", notation scientifique, texte non numérique.
pub fn grouper(nombre: &str) -> String {
    if nombre == "Infinity" || nombre == "NaN" {
        return nombre.to_string();
    }

    let (signe, s) = match nombre.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", nombre),
    };
    if s.is_empty() || s.contains(['e', 'E']) {
        return nombre.to_string();
    }

    let (entier, decimales) = match s.split_once('.') {
        Some((e, d)) => (e, Some(d)),
        None => (s, None),
    };
    if !entier.chars().all(|c| c.is_ascii_digit()) {
        return nombre.to_string();
    }

    let mut groupe = String::with_capacity(entier.len() + entier.len() / 3);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (entier.len() - i) % 3 == 0 {
            groupe.push(',');
        }
        groupe.push(c);
    }

    match decimales {
        Some(d) => format!("{signe}{groupe}.{d}"),
        None => format!("{signe}{groupe}"),
    }
}

/// Tampon brut -> texte affiché : "0" si vide, chaque littéral groupé.
pub fn format_expression_affichage(brut: &str) -> String {
    if brut.is_empty() {
        return "0".to_string();
    }
    LITTERAL
        .replace_all(brut, |c: &Captures| grouper(&c[0]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entiers_sans_decimales() {
        assert_eq!(format_resultat(5.0), "5");
        assert_eq!(format_resultat(-42.0), "-42");
        assert_eq!(format_resultat(-0.0), "0");
        assert_eq!(format_resultat(1e21), "1000000000000000000000");
        assert_eq!(format_resultat(1.5e21), "1500000000000000000000");
    }

    #[test]
    fn decimales_arrondies() {
        assert_eq!(format_resultat(0.1 + 0.2), "0.3");
        assert_eq!(format_resultat(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_resultat(2.5), "2.5");
        assert_eq!(format_resultat(1e-11), "0");
        assert_eq!(format_resultat(1.5e-7), "0.00000015");
        assert_eq!(format_resultat(-1e-7), "-0.0000001");
    }

    #[test]
    fn sentinelles_non_finies() {
        assert_eq!(format_resultat(f64::INFINITY), "Infinity");
        assert_eq!(format_resultat(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_resultat(f64::NAN), "NaN");
    }

    #[test]
    fn groupement() {
        assert_eq!(grouper("1234567"), "1,234,567");
        assert_eq!(grouper("-1234.5"), "-1,234.5");
        assert_eq!(grouper("123"), "123");
        assert_eq!(grouper("1000"), "1,000");
        assert_eq!(grouper("0.12345"), "0.12345");
        assert_eq!(grouper("Infinity"), "Infinity");
        assert_eq!(grouper("-Infinity"), "-Infinity");
        assert_eq!(grouper("1e+21"), "1e+21");
        assert_eq!(grouper(""), "");
    }

    #[test]
    fn affichage_expression() {
        assert_eq!(format_expression_affichage(""), "0");
        assert_eq!(format_expression_affichage("1234+56789.25"), "1,234+56,789.25");
        assert_eq!(format_expression_affichage("Error"), "Error");
        assert_eq!(format_expression_affichage("2x=10000"), "2x=10,000");
    }

    #[test]
    fn complexes() {
        assert_eq!(format_complexe(Complex64::new(-1.0, 2.0)), "-1 + 2i");
        assert_eq!(format_complexe(Complex64::new(0.5, -1.5)), "0.5 - 1.5i");
        assert_eq!(format_complexe(Complex64::new(3.0, 0.0)), "3");
    }
}
