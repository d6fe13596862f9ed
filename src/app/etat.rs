//! src/app/etat.rs
//!
//! État UI de la calculatrice (sans vue).
//!
//! Rôle : posséder le tampon, l’aperçu, l’historique, les préférences et
//! l’invite modale en cours ; toute modification passe par `executer`.
//!
//! Contrats :
//! - Aucune évaluation ici : le noyau (calcul.rs) rend une `Sortie` ou une erreur.
//! - Une erreur affiche "Error" et ne touche pas à l’historique,
//!   sauf les simples avis (saisie d’invite non numérique…) qui laissent tout en place.
//! - Invite ouverte => seules la validation, l’annulation et les préférences passent.

use tracing::{debug, warn};

use crate::noyau::calcul::{
    aiguiller, apercu, appliquer_racine, appliquer_racine_nieme, appliquer_trig,
    calculer_avec_x, calculer_simple, resoudre_equation, Aiguillage, Sortie,
};
use crate::noyau::erreur::ResultatCalcul;
use crate::noyau::format::SENTINELLE_ERREUR;
use crate::noyau::historique::Historique;
use crate::noyau::saisie;
use crate::noyau::trig::TrigFn;

use super::preferences::Preferences;

/// Question posée par l’invite modale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demande {
    ValeurX,
    DegreRacine,
}

impl Demande {
    pub fn question(self) -> &'static str {
        match self {
            Demande::ValeurX => "Valeur de x :",
            Demande::DegreRacine => "Degré de la racine (n), ex. 2 pour la racine carrée :",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Invite {
    pub demande: Demande,
    pub saisie: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Ajouter(char),
    Calculer,
    EffacerDernier,
    Effacer,
    Racine,
    RacineNieme,
    Trig(TrigFn),
    ValiderInvite,
    AnnulerInvite,
    DemanderViderHistorique,
    ConfirmerViderHistorique,
    AnnulerViderHistorique,
    BasculerTheme,
    Echelle(f32),
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- tampon brut, jamais vide ("0" au repos) ---
    pub expression: String,
    pub apercu: String,

    pub historique: Historique,
    pub preferences: Preferences,

    // --- modales ---
    pub invite: Option<Invite>,
    pub confirmer_effacement: bool,

    /// Avis affiché sous l’écran (opération abandonnée sans erreur).
    pub avis: Option<String>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: saisie::effacer(),
            apercu: String::new(),
            historique: Historique::default(),
            preferences: Preferences::default(),
            invite: None,
            confirmer_effacement: false,
            avis: None,
        }
    }
}

impl AppCalc {
    pub fn nouveau(stockage: Option<&dyn eframe::Storage>) -> Self {
        Self {
            preferences: Preferences::charger(stockage),
            ..Self::default()
        }
    }

    pub fn executer(&mut self, action: Action) {
        if self.invite.is_some()
            && !matches!(
                action,
                Action::ValiderInvite
                    | Action::AnnulerInvite
                    | Action::BasculerTheme
                    | Action::Echelle(_)
            )
        {
            debug!(?action, "ignorée : invite ouverte");
            return;
        }

        match action {
            Action::Ajouter(c) => {
                let t = saisie::ajouter(&self.expression, c);
                self.editer(t);
            }
            Action::EffacerDernier => {
                let t = saisie::effacer_dernier(&self.expression);
                self.editer(t);
            }
            Action::Effacer => {
                self.expression = saisie::effacer();
                self.apercu.clear();
                self.avis = None;
            }
            Action::Calculer => self.calculer(),
            Action::Racine => {
                let r = appliquer_racine(&self.expression);
                self.appliquer(r);
            }
            Action::RacineNieme => self.ouvrir_invite(Demande::DegreRacine),
            Action::Trig(f) => {
                let r = appliquer_trig(&self.expression, f);
                self.appliquer(r);
            }
            Action::ValiderInvite => self.valider_invite(),
            Action::AnnulerInvite => self.invite = None,
            Action::DemanderViderHistorique => {
                if !self.historique.is_empty() {
                    self.confirmer_effacement = true;
                }
            }
            Action::ConfirmerViderHistorique => {
                self.historique.vider();
                self.confirmer_effacement = false;
            }
            Action::AnnulerViderHistorique => self.confirmer_effacement = false,
            Action::BasculerTheme => self.preferences.basculer_theme(),
            Action::Echelle(e) => self.preferences.choisir_echelle(e),
        }
    }

    fn editer(&mut self, tampon: String) {
        self.apercu = apercu(&tampon);
        self.expression = tampon;
        self.avis = None;
    }

    /// Touche « = » : équation, invite pour x, ou calcul direct.
    fn calculer(&mut self) {
        match aiguiller(&self.expression) {
            Aiguillage::Equation => {
                let r = resoudre_equation(&self.expression);
                self.appliquer(r);
            }
            Aiguillage::Variable => self.ouvrir_invite(Demande::ValeurX),
            Aiguillage::Simple => {
                let r = calculer_simple(&self.expression);
                self.appliquer(r);
            }
        }
    }

    fn ouvrir_invite(&mut self, demande: Demande) {
        self.avis = None;
        self.invite = Some(Invite {
            demande,
            saisie: String::new(),
        });
    }

    fn valider_invite(&mut self) {
        let Some(invite) = self.invite.take() else {
            return;
        };
        let r = match invite.demande {
            Demande::ValeurX => calculer_avec_x(&self.expression, &invite.saisie),
            Demande::DegreRacine => appliquer_racine_nieme(&self.expression, &invite.saisie),
        };
        self.appliquer(r);
    }

    /// Frontière d’erreur unique de toutes les opérations.
    fn appliquer(&mut self, resultat: ResultatCalcul<Sortie>) {
        match resultat {
            Ok(sortie) => {
                debug!(calcul = %sortie.entree.calcul, "historique");
                self.expression = sortie.affichage;
                self.historique.ajouter(sortie.entree);
                self.apercu.clear();
                self.avis = None;
            }
            Err(e) if e.laisse_affichage() => {
                warn!(erreur = %e, expression = %self.expression, "opération abandonnée");
                self.avis = Some(e.to_string());
            }
            Err(e) => {
                warn!(erreur = %e, expression = %self.expression, "opération rejetée");
                self.expression = SENTINELLE_ERREUR.to_string();
                self.apercu.clear();
                self.avis = None;
            }
        }
    }
}
