//! Résolution d’équations à une variable (x) par échantillonnage.
//!
//! f(x) = gauche(x) - droite(x), échantillonnée en x = 0, 1, 2 :
//! - différence seconde d2 = f(2) - 2f(1) + f(0)
//! - |d2| > ε  => second degré : a = d2/2, b = f(1) - f(0) - a, c = f(0)
//! - sinon     => premier degré : a = f(1) - f(0), b = f(0)
//!
//! Exact seulement si f est un polynôme de degré ≤ 2 en x. Un quatrième
//! échantillon f(3) sert de témoin : s’il contredit le modèle, une étape
//! d’avertissement est ajoutée (les racines rapportées restent celles du modèle).

use num_complex::Complex64;
use tracing::debug;

use super::erreur::{ErreurCalcul, ErreurEvaluation, ResultatCalcul};
use super::eval::{evaluer, preparer_avec_x};
use super::format::{
    format_complexe, format_expression_affichage, format_resultat, grouper, SENTINELLE_AUCUNE,
    SENTINELLE_INFINIE,
};
use super::nettoyage::{contient_variable, nettoyer};

/// Seuil de nullité des coefficients.
pub const EPSILON: f64 = 1e-9;

/// Tolérance relative du témoin f(3).
const TOLERANCE_TEMOIN: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    RacineUnique(f64),
    DeuxRacinesReelles(f64, f64),
    DeuxRacinesComplexes(Complex64, Complex64),
    AucuneSolution,
    InfiniteDeSolutions,
}

/// Coefficients inférés par échantillonnage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Modele {
    /// a x² + b x + c
    SecondDegre { a: f64, b: f64, c: f64 },
    /// a x + b
    PremierDegre { a: f64, b: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub gauche: String,
    pub droite: String,
    pub modele: Modele,
    pub solution: Solution,
    /// Le témoin f(3) contredit le modèle de degré ≤ 2.
    pub non_polynomial: bool,
    pub etapes: Vec<String>,
}

impl Resolution {
    /// Texte de l’historique : "<gauche> = <droite> => x = …"
    pub fn texte_resultat(&self) -> String {
        let g = format_expression_affichage(&self.gauche);
        let d = format_expression_affichage(&self.droite);
        let fin = match &self.solution {
            Solution::RacineUnique(x) => format!("x = {}", grouper(&format_resultat(*x))),
            Solution::DeuxRacinesReelles(x1, x2) => format!(
                "x = {}, {}",
                grouper(&format_resultat(*x1)),
                grouper(&format_resultat(*x2))
            ),
            Solution::DeuxRacinesComplexes(z1, z2) => {
                format!("x = {}, {}", format_complexe(*z1), format_complexe(*z2))
            }
            Solution::AucuneSolution => SENTINELLE_AUCUNE.to_string(),
            Solution::InfiniteDeSolutions => "∀x (infinitely many solutions)".to_string(),
        };
        format!("{g} = {d} => {fin}")
    }

    /// Texte à déposer dans le tampon d’affichage.
    pub fn affichage(&self) -> String {
        match &self.solution {
            Solution::RacineUnique(x) | Solution::DeuxRacinesReelles(x, _) => format_resultat(*x),
            Solution::DeuxRacinesComplexes(z, _) => format_resultat(z.re),
            Solution::AucuneSolution => SENTINELLE_AUCUNE.to_string(),
            Solution::InfiniteDeSolutions => SENTINELLE_INFINIE.to_string(),
        }
    }

    /// Réserve à afficher quand le témoin f(3) contredit le modèle.
    pub fn avertissement(&self) -> Option<String> {
        if !self.non_polynomial {
            return None;
        }
        let degre = match self.modele {
            Modele::SecondDegre { .. } => 2,
            Modele::PremierDegre { .. } => 1,
        };
        Some(format!(
            "f(3) contredit le modèle de degré {degre} : résultat possiblement faux"
        ))
    }
}

/// Coupe l’équation sur l’unique `=` et valide les deux côtés.
fn decouper(expression: &str) -> ResultatCalcul<(String, String)> {
    let parts: Vec<&str> = expression.split('=').collect();
    match parts.len() {
        1 => {
            return Err(ErreurCalcul::EquationMalformee(
                "aucun signe =".into(),
            ))
        }
        2 => {}
        _ => {
            return Err(ErreurCalcul::EquationMalformee(
                "plus d’un signe =".into(),
            ))
        }
    }

    let gauche = parts[0].trim();
    let droite = parts[1].trim();
    if gauche.is_empty() || droite.is_empty() {
        return Err(ErreurCalcul::EquationMalformee("côté vide".into()));
    }
    if !contient_variable(gauche) && !contient_variable(droite) {
        return Err(ErreurCalcul::EquationMalformee("pas de variable x".into()));
    }
    Ok((gauche.to_string(), droite.to_string()))
}

/// Un côté évalué pour x = xv.
fn evaluer_cote(cote: &str, xv: f64) -> ResultatCalcul<f64> {
    let prepare = preparer_avec_x(cote, &xv.to_string());
    let nettoyee = nettoyer(&prepare)?;
    Ok(evaluer(&nettoyee)?)
}

/// f(xv) = gauche(xv) - droite(xv), toujours fini en cas de succès.
fn difference(gauche: &str, droite: &str, xv: f64) -> ResultatCalcul<f64> {
    let v = evaluer_cote(gauche, xv)? - evaluer_cote(droite, xv)?;
    if !v.is_finite() {
        return Err(ErreurEvaluation::NonFinie.into());
    }
    Ok(v)
}

/// Écart relatif entre une valeur observée et la prédiction du modèle.
fn contredit(observe: f64, predit: f64) -> bool {
    (observe - predit).abs() > TOLERANCE_TEMOIN * observe.abs().max(1.0)
}

/// API publique : résout une équation en x (ex: "2x+3=7", "x^2-4=0").
pub fn resoudre(expression: &str) -> ResultatCalcul<Resolution> {
    let (gauche, droite) = decouper(expression)?;

    let f0 = difference(&gauche, &droite, 0.0)?;
    let f1 = difference(&gauche, &droite, 1.0)?;
    let f2 = difference(&gauche, &droite, 2.0)?;

    let d2 = f2 - 2.0 * f1 + f0;
    let fr = format_resultat;

    let mut etapes = Vec::new();
    let ramener = format!("Tout ramener d’un côté : ({gauche}) - ({droite}) = 0");

    let (modele, solution) = if d2.abs() > EPSILON {
        let a = d2 / 2.0;
        let b = f1 - f0 - a;
        let c = f0;
        let d = b * b - 4.0 * a * c;

        etapes.push("Équation du second degré :".to_string());
        etapes.push(ramener);
        etapes.push(format!("f(0) = {}, f(1) = {}, f(2) = {}", fr(f0), fr(f1), fr(f2)));
        etapes.push(format!(
            "Coefficients (échantillonnage) : a = {}, b = {}, c = {}",
            fr(a),
            fr(b),
            fr(c)
        ));
        etapes.push(format!("Discriminant : D = b^2 - 4ac = {}", fr(d)));

        let solution = if d >= 0.0 {
            let racine_d = d.sqrt();
            let x1 = (-b + racine_d) / (2.0 * a);
            let x2 = (-b - racine_d) / (2.0 * a);
            if !x1.is_finite() || !x2.is_finite() {
                return Err(ErreurEvaluation::NonFinie.into());
            }
            etapes.push(format!(
                "Racines : x1 = (-b + √D) / (2a) = {}, x2 = (-b - √D) / (2a) = {}",
                fr(x1),
                fr(x2)
            ));
            Solution::DeuxRacinesReelles(x1, x2)
        } else {
            let reel = -b / (2.0 * a);
            let imag = (-d).sqrt() / (2.0 * a.abs());
            let z1 = Complex64::new(reel, imag);
            let z2 = z1.conj();
            etapes.push("D < 0 : racines complexes conjuguées.".to_string());
            etapes.push(format!(
                "Racines : {} , {}",
                format_complexe(z1),
                format_complexe(z2)
            ));
            Solution::DeuxRacinesComplexes(z1, z2)
        };

        (Modele::SecondDegre { a, b, c }, solution)
    } else {
        let a = f1 - f0;
        let b = f0;

        let solution = if a.abs() < EPSILON {
            if b.abs() < EPSILON {
                etapes.push(
                    "Équation équivalente à 0 = 0 : une infinité de solutions (tout x)."
                        .to_string(),
                );
                Solution::InfiniteDeSolutions
            } else {
                etapes.push("Équation contradictoire : aucune solution.".to_string());
                Solution::AucuneSolution
            }
        } else {
            let x = -b / a;
            if !x.is_finite() {
                return Err(ErreurEvaluation::NonFinie.into());
            }
            etapes.push("Équation du premier degré :".to_string());
            etapes.push(ramener);
            etapes.push(format!(
                "f(0) = {} (constante b), f(1) = {} (a + b)",
                fr(f0),
                fr(f1)
            ));
            etapes.push(format!(
                "Donc a = f(1) - f(0) = {}, b = f(0) = {}",
                fr(a),
                fr(b)
            ));
            etapes.push(format!("Solution : x = -b/a = {}", fr(x)));
            Solution::RacineUnique(x)
        };

        (Modele::PremierDegre { a, b }, solution)
    };

    // Témoin : f(3) prédit par le modèle vs observé.
    let predit = match modele {
        Modele::SecondDegre { a, b, c } => 9.0 * a + 3.0 * b + c,
        Modele::PremierDegre { a, b } => 3.0 * a + b,
    };
    let non_polynomial = match difference(&gauche, &droite, 3.0) {
        Ok(f3) => contredit(f3, predit),
        Err(_) => true,
    };
    if non_polynomial {
        etapes.push(
            "Attention : f(3) contredit le modèle (degré > 2 ou non polynomial), résultat possiblement faux."
                .to_string(),
        );
    }

    debug!(?modele, ?solution, non_polynomial, "équation résolue");

    Ok(Resolution {
        gauche,
        droite,
        modele,
        solution,
        non_polynomial,
        etapes,
    })
}
