//! Noyau - opérations de la calculatrice
//!
//! Chaque opération lit le tampon brut et rend une `Sortie` :
//! - `affichage` : nouveau tampon (résultat formaté, sans séparateurs)
//! - `entree`    : ligne d’historique (expression et résultat groupés)
//!
//! Les erreurs remontent telles quelles : c’est l’état UI qui décide
//! entre la sentinelle "Error" et un simple avis.

use super::equation::resoudre;
use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::eval::{
    evaluer, evaluer_brut, evaluer_pour_variable, lire_saisie_numerique, valeur_courante,
};
use super::format::{format_expression_affichage, format_resultat, grouper};
use super::historique::EntreeHistorique;
use super::nettoyage::{contient_variable, nettoyer};
use super::racines::{lire_degre, racine_carree, racine_nieme};
use super::trig::{appliquer, TrigFn};

#[derive(Clone, Debug, PartialEq)]
pub struct Sortie {
    pub affichage: String,
    pub entree: EntreeHistorique,
}

impl Sortie {
    /// Résultat numérique : tampon non groupé, historique groupé.
    fn numerique(calcul_sans_resultat: String, v: f64) -> Self {
        let r = format_resultat(v);
        Self {
            entree: EntreeHistorique::simple(format!("{calcul_sans_resultat} = {}", grouper(&r))),
            affichage: r,
        }
    }
}

/// Ce que déclenche la touche « = ».
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aiguillage {
    /// Le tampon contient `=` : résolution en x.
    Equation,
    /// Le tampon contient x : il faut d’abord demander sa valeur.
    Variable,
    Simple,
}

pub fn aiguiller(brut: &str) -> Aiguillage {
    if brut.contains('=') {
        Aiguillage::Equation
    } else if contient_variable(brut) {
        Aiguillage::Variable
    } else {
        Aiguillage::Simple
    }
}

pub fn calculer_simple(brut: &str) -> ResultatCalcul<Sortie> {
    let v = evaluer_brut(brut)?;
    Ok(Sortie::numerique(format_expression_affichage(brut), v))
}

/// `saisie_x` : réponse brute de l’invite « valeur de x ».
pub fn calculer_avec_x(brut: &str, saisie_x: &str) -> ResultatCalcul<Sortie> {
    let x = lire_saisie_numerique(saisie_x)?;
    let v = evaluer_pour_variable(brut, x)?;
    Ok(Sortie::numerique(
        format!(
            "{} with x={}",
            format_expression_affichage(brut),
            saisie_x.trim()
        ),
        v,
    ))
}

pub fn resoudre_equation(brut: &str) -> ResultatCalcul<Sortie> {
    let r = resoudre(brut)?;
    let avertissement = r.avertissement();
    Ok(Sortie {
        affichage: r.affichage(),
        entree: EntreeHistorique::avec_etapes(r.texte_resultat(), r.etapes)
            .avec_avertissement(avertissement),
    })
}

pub fn appliquer_racine(brut: &str) -> ResultatCalcul<Sortie> {
    let v = valeur_courante(brut)?;
    let r = racine_carree(v)?;
    Ok(Sortie::numerique(
        format!("√({})", format_expression_affichage(brut)),
        r,
    ))
}

/// `saisie_n` : réponse brute de l’invite « degré de la racine ».
/// Le degré est contrôlé avant toute lecture du tampon.
pub fn appliquer_racine_nieme(brut: &str, saisie_n: &str) -> ResultatCalcul<Sortie> {
    let n = lire_degre(saisie_n)?;
    let v = valeur_courante(brut)?;
    let r = racine_nieme(v, n)?;
    Ok(Sortie::numerique(
        format!("{n}√({})", format_expression_affichage(brut)),
        r,
    ))
}

/// Angle du tampon en degrés.
pub fn appliquer_trig(brut: &str, f: TrigFn) -> ResultatCalcul<Sortie> {
    if contient_variable(brut) {
        return Err(ErreurCalcul::VariableNonPermise);
    }
    let v = valeur_courante(brut)?;
    let r = appliquer(f, v)?;
    Ok(Sortie::numerique(
        format!("{f}({})", format_expression_affichage(brut)),
        r,
    ))
}

/// Aperçu "= <résultat groupé>", vide si le tampon n’est pas (encore) calculable.
pub fn apercu(brut: &str) -> String {
    if contient_variable(brut) {
        return String::new();
    }
    let nettoyee = match nettoyer(brut) {
        Ok(n) if n != "0" => n,
        _ => return String::new(),
    };
    match evaluer(&nettoyee) {
        Ok(v) => format!("= {}", grouper(&format_resultat(v))),
        Err(_) => String::new(),
    }
}
