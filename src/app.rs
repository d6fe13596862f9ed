// src/app.rs
//
// Calculatrice - module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, vue, clavier, preferences)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier global est lu APRÈS la vue : une touche qui ouvre l’invite
//   ne peut pas la valider dans la même frame.
// - Pas de clavier global tant qu’une modale est ouverte ou qu’un champ a le focus.

pub mod clavier;
pub mod etat;
pub mod preferences;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.preferences.mode_sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        if ctx.zoom_factor() != self.preferences.echelle {
            ctx.set_zoom_factor(self.preferences.echelle);
        }

        let clavier_libre = self.invite.is_none() && !self.confirmer_effacement;

        self.ui(ctx); // méthode publique (dans vue.rs)

        if clavier_libre && !ctx.wants_keyboard_input() {
            let actions = ctx.input(|i| clavier::actions_du_cadre(&i.events));
            for a in actions {
                self.executer(a);
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.preferences.enregistrer(storage);
    }
}
