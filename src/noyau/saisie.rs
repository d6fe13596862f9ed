// src/noyau/saisie.rs
//
// Édition du tampon brut (sans séparateurs de milliers).
// Chaque fonction reçoit le tampon courant et rend le nouveau.
// Une sentinelle affichée ("Error", "Infinite", "No solution") se comporte comme "0".

use super::format::est_sentinelle;

const OPERATEURS: [char; 5] = ['+', '-', '*', '/', '%'];

fn est_operateur(c: char) -> bool {
    OPERATEURS.contains(&c)
}

/// Tampon "vierge" : vide, "0" ou sentinelle.
fn vierge(tampon: &str) -> bool {
    tampon.is_empty() || tampon == "0" || est_sentinelle(tampon)
}

/// Nombre en cours de saisie : texte après le dernier opérateur.
fn nombre_courant(tampon: &str) -> &str {
    match tampon.rfind(est_operateur) {
        Some(i) => &tampon[i + 1..],
        None => tampon,
    }
}

pub fn ajouter(tampon: &str, jeton: char) -> String {
    let dernier = tampon.chars().last();

    match jeton {
        '0'..='9' => {
            if vierge(tampon) {
                jeton.to_string()
            } else {
                format!("{tampon}{jeton}")
            }
        }

        '.' => {
            if vierge(tampon) {
                "0.".to_string()
            } else if nombre_courant(tampon).contains('.') {
                tampon.to_string()
            } else {
                format!("{tampon}.")
            }
        }

        '(' => {
            if vierge(tampon) {
                "(".to_string()
            } else if matches!(dernier, Some(c) if c.is_ascii_digit() || c == ')') {
                format!("{tampon}*(")
            } else {
                format!("{tampon}(")
            }
        }

        ')' => {
            let ouvrantes = tampon.matches('(').count();
            let fermantes = tampon.matches(')').count();
            let fermable = !vierge(tampon)
                && ouvrantes > fermantes
                && !matches!(dernier, Some(c) if c == '(' || est_operateur(c));
            if fermable {
                format!("{tampon})")
            } else {
                tampon.to_string()
            }
        }

        c if est_operateur(c) => {
            if vierge(tampon) {
                // seul le moins peut ouvrir une expression
                return if c == '-' {
                    "-".to_string()
                } else {
                    format!("0{c}")
                };
            }
            let base = tampon.trim_end_matches(est_operateur);
            if base.is_empty() {
                // "-" seul : remplacé par l’opérateur tapé
                return if c == '-' {
                    "-".to_string()
                } else {
                    "0".to_string()
                };
            }
            format!("{base}{c}")
        }

        'x' | 'X' => {
            if vierge(tampon) {
                "x".to_string()
            } else {
                format!("{tampon}x")
            }
        }

        '=' | '^' => {
            if est_sentinelle(tampon) {
                format!("0{jeton}")
            } else {
                format!("{tampon}{jeton}")
            }
        }

        _ => tampon.to_string(),
    }
}

/// Retour arrière : un caractère.
pub fn effacer_dernier(tampon: &str) -> String {
    if est_sentinelle(tampon) || tampon.chars().count() <= 1 {
        return "0".to_string();
    }
    let mut t = tampon.to_string();
    t.pop();
    if t.is_empty() || t == "-" {
        "0".to_string()
    } else {
        t
    }
}

/// Effacement complet.
pub fn effacer() -> String {
    "0".to_string()
}
