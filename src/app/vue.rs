// src/app/vue.rs
//
// Vue (UI egui) - natif + web
// ---------------------------
// - Écran : tampon groupé (1,234+5), aperçu "= …", avis éventuel
// - Pavé + rangée de fonctions (√, n√, sin, cos, tan, x, ^, =)
// - Panneau historique à droite, démarche repliable par entrée
// - Modales : invite (valeur de x / degré) et confirmation « tout effacer »
//
// La vue ne modifie rien directement : elle collecte des `Action`
// puis les passe à `executer` en fin de frame.

use eframe::egui;

use crate::noyau::format::format_expression_affichage;
use crate::noyau::trig::TrigFn;

use super::etat::{Action, AppCalc};
use super::preferences::ECHELLES;

const TAILLE_TOUCHE: [f32; 2] = [58.0, 40.0];
const TAILLE_FONCTION: [f32; 2] = [50.0, 30.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();
        let modale = self.invite.is_some() || self.confirmer_effacement;

        egui::TopBottomPanel::top("barre_preferences").show(ctx, |ui| {
            self.ui_barre(ui, &mut actions);
        });

        egui::SidePanel::right("panneau_historique")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modale, |ui| self.ui_historique(ui, &mut actions));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            // Densité “calc”
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
            ui.add_enabled_ui(!modale, |ui| {
                self.ui_ecran(ui);
                ui.add_space(8.0);
                self.ui_fonctions(ui, &mut actions);
                ui.add_space(6.0);
                self.ui_pave(ui, &mut actions);
            });
        });

        self.ui_invite(ctx, &mut actions);
        self.ui_confirmation(ctx, &mut actions);

        for a in actions {
            self.executer(a);
        }
    }

    fn ui_barre(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice");
            ui.separator();

            let theme = if self.preferences.mode_sombre {
                "☀ Clair"
            } else {
                "🌙 Sombre"
            };
            if ui.button(theme).clicked() {
                actions.push(Action::BasculerTheme);
            }

            ui.separator();
            ui.label("Taille :");
            for e in ECHELLES {
                let actif = self.preferences.echelle == e;
                if ui
                    .add(egui::Button::new(format!("{e}")).selected(actif))
                    .clicked()
                {
                    actions.push(Action::Echelle(e));
                }
            }
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(format_expression_affichage(&self.expression))
                            .monospace()
                            .size(32.0),
                    );
                    // hauteur stable même sans aperçu
                    let apercu = if self.apercu.is_empty() {
                        " "
                    } else {
                        self.apercu.as_str()
                    };
                    ui.label(
                        egui::RichText::new(apercu)
                            .monospace()
                            .color(ui.visuals().weak_text_color()),
                    );
                });
            });

        if let Some(avis) = &self.avis {
            ui.colored_label(ui.visuals().warn_fg_color, avis.as_str());
        }
    }

    fn ui_fonctions(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.horizontal_wrapped(|ui| {
            Self::bouton(ui, "√", "Racine carrée (r)", TAILLE_FONCTION, Action::Racine, actions);
            Self::bouton(ui, "n√", "Racine n-ième (R)", TAILLE_FONCTION, Action::RacineNieme, actions);
            for f in [TrigFn::Sin, TrigFn::Cos, TrigFn::Tan] {
                Self::bouton(ui, f.nom(), "Angle en degrés", TAILLE_FONCTION, Action::Trig(f), actions);
            }
            ui.separator();
            Self::bouton(ui, "x", "Variable x", TAILLE_FONCTION, Action::Ajouter('x'), actions);
            Self::bouton(ui, "^", "Puissance", TAILLE_FONCTION, Action::Ajouter('^'), actions);
            Self::bouton(
                ui,
                "éq =",
                "Signe = d’une équation en x (ex: 2x+3=7)",
                TAILLE_FONCTION,
                Action::Ajouter('='),
                actions,
            );
        });
    }

    fn ui_pave(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        const LIGNES: [[(&str, Action); 4]; 5] = [
            [
                ("C", Action::Effacer),
                ("DEL", Action::EffacerDernier),
                ("%", Action::Ajouter('%')),
                ("÷", Action::Ajouter('/')),
            ],
            [
                ("7", Action::Ajouter('7')),
                ("8", Action::Ajouter('8')),
                ("9", Action::Ajouter('9')),
                ("×", Action::Ajouter('*')),
            ],
            [
                ("4", Action::Ajouter('4')),
                ("5", Action::Ajouter('5')),
                ("6", Action::Ajouter('6')),
                ("-", Action::Ajouter('-')),
            ],
            [
                ("1", Action::Ajouter('1')),
                ("2", Action::Ajouter('2')),
                ("3", Action::Ajouter('3')),
                ("+", Action::Ajouter('+')),
            ],
            [
                ("0", Action::Ajouter('0')),
                (".", Action::Ajouter('.')),
                ("(", Action::Ajouter('(')),
                (")", Action::Ajouter(')')),
            ],
        ];

        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in LIGNES {
                    for (label, action) in ligne {
                        if ui
                            .add_sized(TAILLE_TOUCHE, egui::Button::new(label))
                            .clicked()
                        {
                            actions.push(action);
                        }
                    }
                    ui.end_row();
                }
            });

        let largeur = 4.0 * TAILLE_TOUCHE[0] + 3.0 * 6.0;
        if ui
            .add_sized([largeur, TAILLE_TOUCHE[1]], egui::Button::new("="))
            .clicked()
        {
            actions.push(Action::Calculer);
        }
    }

    fn ui_historique(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            ui.heading(format!("Historique ({})", self.historique.len()));
            let vide = self.historique.is_empty();
            if ui
                .add_enabled(!vide, egui::Button::new("Tout effacer"))
                .clicked()
            {
                actions.push(Action::DemanderViderHistorique);
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("Aucun calcul.");
                }
                for (i, entree) in self.historique.iter().enumerate() {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(entree.calcul.as_str());
                        if let Some(avertissement) = &entree.avertissement {
                            ui.colored_label(ui.visuals().warn_fg_color, "(?)")
                                .on_hover_text(avertissement.as_str());
                        }
                    });
                    if let Some(etapes) = &entree.etapes {
                        egui::CollapsingHeader::new("Démarche")
                            .id_salt(("demarche", i))
                            .default_open(false)
                            .show(ui, |ui| {
                                for etape in etapes {
                                    ui.monospace(etape.as_str());
                                }
                                if ui.small_button("Copier").clicked() {
                                    ui.ctx().copy_text(entree.etapes_texte());
                                }
                            });
                    }
                    ui.separator();
                }
            });
    }

    fn ui_invite(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let Some(invite) = self.invite.as_mut() else {
            return;
        };

        egui::Window::new("Saisie")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(invite.demande.question());
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut invite.saisie)
                        .id_salt("invite_saisie")
                        .desired_width(200.0),
                );
                if !resp.has_focus() && !resp.lost_focus() {
                    resp.request_focus();
                }

                let entree = ui.input(|i| i.key_pressed(egui::Key::Enter));
                let echap = ui.input(|i| i.key_pressed(egui::Key::Escape));

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || entree {
                        actions.push(Action::ValiderInvite);
                    }
                    if ui.button("Annuler").clicked() || echap {
                        actions.push(Action::AnnulerInvite);
                    }
                });
            });
    }

    fn ui_confirmation(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        if !self.confirmer_effacement {
            return;
        }

        egui::Window::new("Historique")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Effacer tout l’historique des calculs ?");
                ui.horizontal(|ui| {
                    if ui.button("Effacer").clicked() {
                        actions.push(Action::ConfirmerViderHistorique);
                    }
                    if ui.button("Annuler").clicked() {
                        actions.push(Action::AnnulerViderHistorique);
                    }
                });
            });
    }

    fn bouton(
        ui: &mut egui::Ui,
        label: &str,
        tip: &str,
        taille: [f32; 2],
        action: Action,
        actions: &mut Vec<Action>,
    ) {
        let resp = ui
            .add_sized(taille, egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            actions.push(action);
        }
    }
}
