//! Noyau - évaluation (adaptateur)
//!
//! nettoyer -> tokenize -> RPN -> Expr -> repli f64 -> contrôle fini
//!
//! Aucun évaluateur générique : seul le petit langage arithmétique
//! (+ - * / % ** parenthèses, littéraux décimaux) est accepté.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::erreur::{ErreurCalcul, ErreurEvaluation, ResultatCalcul};
use super::jetons::{format_tokens, tokenize};
use super::nettoyage::nettoyer;
use super::rpn::{from_rpn, to_rpn};

lazy_static! {
    static ref CHIFFRE_AVANT_X: Regex = Regex::new(r"(\d)\s*([xX])").unwrap();
    static ref PAR_FERMANTE_AVANT_X: Regex = Regex::new(r"\)\s*([xX])").unwrap();
    static ref CHIFFRE_AVANT_PAR: Regex = Regex::new(r"(\d)\s*\(").unwrap();
    static ref PAR_ENTRE_PAR: Regex = Regex::new(r"\)\s*\(").unwrap();
    static ref PAR_AVANT_CHIFFRE: Regex = Regex::new(r"\)\s*(\d)").unwrap();
    static ref VARIABLE: Regex = Regex::new(r"[xX]").unwrap();
    static ref SAISIE_NUMERIQUE: Regex = Regex::new(r"^[+\-]?\d+(?:\.\d+)?$").unwrap();
    static ref PREFIXE_NUMERIQUE: Regex =
        Regex::new(r"^\s*[+\-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+\-]?\d+)?").unwrap();
}

/// API publique : évalue une expression DÉJÀ nettoyée.
///
/// - échec de lecture (jetons/RPN/arbre) => `ExpressionInvalide`
/// - ±∞ ou NaN => `NonFinie`
pub fn evaluer(nettoyee: &str) -> Result<f64, ErreurEvaluation> {
    let jetons = tokenize(nettoyee).map_err(ErreurEvaluation::ExpressionInvalide)?;
    let rpn = to_rpn(&jetons).map_err(ErreurEvaluation::ExpressionInvalide)?;
    let expr = from_rpn(&rpn).map_err(ErreurEvaluation::ExpressionInvalide)?;

    let v = expr.evaluer();
    debug!(jetons = %format_tokens(&jetons), valeur = v, "évaluation");

    if !v.is_finite() {
        return Err(ErreurEvaluation::NonFinie);
    }
    Ok(v)
}

/// Nettoyage + évaluation d’une expression brute.
pub fn evaluer_brut(brut: &str) -> ResultatCalcul<f64> {
    let nettoyee = nettoyer(brut)?;
    Ok(evaluer(&nettoyee)?)
}

/// Prépare un côté d’expression pour la valeur `valeur` de x :
/// - glyphes × ÷ ^ normalisés
/// - multiplication implicite : 2x, 2 x, )x, 2(, )(, )2
/// - chaque x (casse ignorée) remplacé par `(valeur)`
pub fn preparer_avec_x(brut: &str, valeur: &str) -> String {
    let t = brut
        .replace('×', "*")
        .replace('÷', "/")
        .replace('^', "**");

    let t = CHIFFRE_AVANT_X.replace_all(&t, "${1}*${2}");
    let t = PAR_FERMANTE_AVANT_X.replace_all(&t, ")*${1}");
    let t = CHIFFRE_AVANT_PAR.replace_all(&t, "${1}*(");
    let t = PAR_ENTRE_PAR.replace_all(&t, ")*(");
    let t = PAR_AVANT_CHIFFRE.replace_all(&t, ")*${1}");

    let remplacement = format!("({valeur})");
    VARIABLE
        .replace_all(&t, regex::NoExpand(&remplacement))
        .into_owned()
}

/// Substitue x par `valeur` puis nettoie et évalue.
pub fn evaluer_pour_variable(brut: &str, valeur: f64) -> ResultatCalcul<f64> {
    if !valeur.is_finite() {
        return Err(ErreurCalcul::SaisieNonNumerique(valeur.to_string()));
    }
    let prepare = preparer_avec_x(brut, &valeur.to_string());
    evaluer_brut(&prepare)
}

/// Contrôle d’une réponse d’invite (valeur de x) : entier ou décimal signé.
pub fn lire_saisie_numerique(saisie: &str) -> ResultatCalcul<f64> {
    let s = saisie.trim();
    if !SAISIE_NUMERIQUE.is_match(s) {
        return Err(ErreurCalcul::SaisieNonNumerique(s.to_string()));
    }
    s.parse::<f64>()
        .map_err(|_| ErreurCalcul::SaisieNonNumerique(s.to_string()))
}

/// Valeur numérique du tampon courant pour les fonctions unaires :
/// évaluation normale si le nettoyage accepte l’entrée, sinon lecture du
/// préfixe numérique (ex: "-3=" -> -3). Toujours finie en cas de succès.
pub fn valeur_courante(brut: &str) -> ResultatCalcul<f64> {
    match nettoyer(brut) {
        Ok(nettoyee) => Ok(evaluer(&nettoyee)?),
        Err(ErreurCalcul::CaractereInvalide(_)) | Err(ErreurCalcul::ExpressionVide) => {
            let m = PREFIXE_NUMERIQUE
                .find(brut)
                .ok_or_else(|| ErreurEvaluation::ExpressionInvalide(brut.to_string()))?;
            let v: f64 = m
                .as_str()
                .trim()
                .parse()
                .map_err(|_| ErreurEvaluation::ExpressionInvalide(brut.to_string()))?;
            if !v.is_finite() {
                return Err(ErreurEvaluation::NonFinie.into());
            }
            Ok(v)
        }
        Err(e) => Err(e),
    }
}
