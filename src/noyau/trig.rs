// src/noyau/trig.rs
//
// sin / cos / tan sur un angle en DEGRÉS (conversion interne en radians).
// tan est refusée près des asymptotes verticales : |cos| < 1e-12.

use std::fmt;

use super::erreur::{ErreurCalcul, ErreurEvaluation, ResultatCalcul};

/// Garde-fou tangente : cosinus considéré nul en deçà.
const COS_QUASI_NUL: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    pub fn nom(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
        }
    }
}

impl fmt::Display for TrigFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

pub fn appliquer(f: TrigFn, degres: f64) -> ResultatCalcul<f64> {
    let rad = degres.to_radians();

    let r = match f {
        TrigFn::Sin => rad.sin(),
        TrigFn::Cos => rad.cos(),
        TrigFn::Tan => {
            if rad.cos().abs() < COS_QUASI_NUL {
                return Err(ErreurCalcul::Domaine(format!("tan({degres}°) indéfinie")));
            }
            rad.tan()
        }
    };

    if !r.is_finite() {
        return Err(ErreurEvaluation::NonFinie.into());
    }
    Ok(r)
}
