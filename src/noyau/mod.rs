//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - nettoyage.rs  : normalisation + liste blanche de l’entrée brute
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : arbre arithmétique (f64)
//! - eval.rs       : pipeline complet + substitution de x
//! - format.rs     : résultats, séparateurs de milliers, sentinelles
//! - equation.rs   : solveur par échantillonnage (degré ≤ 2)
//! - racines.rs    : √ et ⁿ√
//! - trig.rs       : sin / cos / tan en degrés
//! - saisie.rs     : édition du tampon
//! - historique.rs : historique en ajout seul
//! - calcul.rs     : opérations de la calculatrice (tampon -> Sortie)

pub mod calcul;
pub mod equation;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod nettoyage;
pub mod racines;
pub mod rpn;
pub mod saisie;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;
