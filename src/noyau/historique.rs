// src/noyau/historique.rs
//
// Historique des calculs : liste ordonnée, en ajout seul.
// Seule l’action explicite « tout effacer » retire des entrées. Rien n’est persisté.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    /// Texte du calcul : "12 + 3 = 15", "2x+3 = 7 => x = 2"…
    pub calcul: String,
    /// Démarche détaillée (résolution d’équation).
    pub etapes: Option<Vec<String>>,
    /// Réserve sur le résultat (équation hors du modèle de degré ≤ 2).
    pub avertissement: Option<String>,
}

impl EntreeHistorique {
    pub fn simple(calcul: impl Into<String>) -> Self {
        Self {
            calcul: calcul.into(),
            etapes: None,
            avertissement: None,
        }
    }

    pub fn avec_etapes(calcul: impl Into<String>, etapes: Vec<String>) -> Self {
        Self {
            calcul: calcul.into(),
            etapes: if etapes.is_empty() { None } else { Some(etapes) },
            avertissement: None,
        }
    }

    pub fn avec_avertissement(mut self, avertissement: Option<String>) -> Self {
        self.avertissement = avertissement;
        self
    }

    /// Démarche sur plusieurs lignes (vide si aucune).
    pub fn etapes_texte(&self) -> String {
        self.etapes
            .as_deref()
            .map(|e| e.join("\n"))
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    pub fn ajouter(&mut self, entree: EntreeHistorique) {
        self.entrees.push(entree);
    }

    /// « Tout effacer » (après confirmation côté UI).
    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Plus ancienne d’abord.
    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }
}
