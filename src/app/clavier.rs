// src/app/clavier.rs
//
// Raccourcis clavier globaux (quand aucun champ texte n’a le focus).
// Caractères => Event::Text ; touches de contrôle => Event::Key.
// Sur le clavier, x / X signifient « multiplier » (la variable x reste au pavé).

use eframe::egui;

use super::etat::Action;

pub fn action_pour_texte(c: char) -> Option<Action> {
    match c {
        '0'..='9' | '.' | '(' | ')' | '+' | '-' | '/' | '%' => Some(Action::Ajouter(c)),
        '*' | 'x' | 'X' => Some(Action::Ajouter('*')),
        '=' => Some(Action::Calculer),
        'c' | 'C' => Some(Action::Effacer),
        'r' => Some(Action::Racine),
        'R' => Some(Action::RacineNieme),
        _ => None,
    }
}

pub fn action_pour_touche(touche: egui::Key) -> Option<Action> {
    match touche {
        egui::Key::Enter => Some(Action::Calculer),
        egui::Key::Backspace => Some(Action::EffacerDernier),
        egui::Key::Escape => Some(Action::Effacer),
        _ => None,
    }
}

/// Actions de la frame, dans l’ordre des événements.
pub fn actions_du_cadre(evenements: &[egui::Event]) -> Vec<Action> {
    let mut actions = Vec::new();
    for ev in evenements {
        match ev {
            egui::Event::Text(t) => actions.extend(t.chars().filter_map(action_pour_texte)),
            egui::Event::Key {
                key, pressed: true, ..
            } => actions.extend(action_pour_touche(*key)),
            _ => {}
        }
    }
    actions
}
