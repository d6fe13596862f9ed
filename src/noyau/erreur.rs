// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Toutes les erreurs sont traitées à la frontière d’une opération (calcul.rs / etat.rs) :
// aucune ne remonte jusqu’à la boucle d’événements.

use thiserror::Error;

/// Échec de l’évaluateur arithmétique.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEvaluation {
    #[error("expression invalide : {0}")]
    ExpressionInvalide(String),

    #[error("résultat non fini")]
    NonFinie,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Le nettoyage a rejeté au moins un caractère.
    #[error("caractère non autorisé dans « {0} »")]
    CaractereInvalide(String),

    /// Rien à évaluer après nettoyage.
    #[error("entrée vide")]
    ExpressionVide,

    #[error(transparent)]
    Evaluation(#[from] ErreurEvaluation),

    /// Radicande négatif (racine paire), tangente quasi singulière…
    #[error("hors domaine : {0}")]
    Domaine(String),

    /// Zéro ou plusieurs `=`, côté vide, pas de variable.
    #[error("équation non reconnue : {0}")]
    EquationMalformee(String),

    /// Réponse d’invite (valeur de x, degré de racine) non numérique.
    #[error("saisie non numérique : « {0} »")]
    SaisieNonNumerique(String),

    /// Fonction trigonométrique demandée sur une expression en x.
    #[error("fonction trigonométrique impossible sur une expression en x")]
    VariableNonPermise,
}

impl ErreurCalcul {
    /// Vrai si l’opération doit être abandonnée sans toucher à l’affichage
    /// (simple avis) plutôt que d’afficher "Error".
    pub fn laisse_affichage(&self) -> bool {
        matches!(
            self,
            ErreurCalcul::SaisieNonNumerique(_) | ErreurCalcul::VariableNonPermise
        )
    }
}

pub type ResultatCalcul<T> = Result<T, ErreurCalcul>;
