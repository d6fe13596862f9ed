//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur et longueur bornées
//! - budget temps global
//! - oracle : chaque expression générée porte sa valeur attendue

use std::time::{Duration, Instant};

use super::calcul::{aiguiller, apercu, calculer_simple, resoudre_equation, Aiguillage};
use super::erreur::{ErreurCalcul, ErreurEvaluation};
use super::format::est_sentinelle;
use super::saisie::{ajouter, effacer_dernier};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération avec oracle ------------------------ */

/// (texte, valeur attendue) ; la valeur peut être non finie (division par zéro).
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 || rng.pick(4) == 0 {
        let n = rng.pick(20);
        return (n.to_string(), f64::from(n));
    }

    let (a, va) = gen_expr(rng, depth - 1);
    let (b, vb) = gen_expr(rng, depth - 1);
    match rng.pick(4) {
        0 => (format!("({a}+{b})"), va + vb),
        1 => (format!("({a}-{b})"), va - vb),
        2 => (format!("({a}*{b})"), va * vb),
        _ => (format!("({a}/{b})"), va / vb),
    }
}

const TOUCHES: [char; 20] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '%', '(', ')', 'x',
    '=',
];

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_oracle_arithmetique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);
        let (expr, attendu) = gen_expr(&mut rng, 4);

        match calculer_simple(&expr) {
            Ok(s) => {
                assert!(attendu.is_finite(), "expr={expr:?} devrait échouer");
                let lu: f64 = s.affichage.parse().unwrap_or_else(|e| {
                    panic!("affichage illisible {:?} ({e}) pour {expr:?}", s.affichage)
                });
                let tol = 1e-9 * attendu.abs().max(1.0);
                assert!(
                    (lu - attendu).abs() <= tol,
                    "expr={expr:?} lu={lu} attendu={attendu}"
                );
                vus_ok += 1;
            }
            Err(e) => {
                assert_eq!(
                    e,
                    ErreurCalcul::Evaluation(ErreurEvaluation::NonFinie),
                    "erreur non attendue: expr={expr:?}"
                );
                assert!(!attendu.is_finite(), "expr={expr:?} attendu={attendu}");
                vus_err += 1;
            }
        }
    }

    assert!(vus_ok > 50, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_frappes_clavier() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let mut tampon = String::from("0");
        for _ in 0..rng.pick(16) {
            tampon = if rng.pick(8) == 0 {
                effacer_dernier(&tampon)
            } else {
                ajouter(&tampon, TOUCHES[rng.pick(TOUCHES.len() as u32) as usize])
            };
            assert!(!tampon.is_empty(), "tampon vide après édition");
        }

        let a = apercu(&tampon);
        assert!(a.is_empty() || a.starts_with("= "), "aperçu={a:?}");

        // Les opérations ne paniquent jamais ; un succès dépose un nombre ou une sentinelle.
        let sortie = match aiguiller(&tampon) {
            Aiguillage::Equation => resoudre_equation(&tampon),
            Aiguillage::Variable => continue,
            Aiguillage::Simple => calculer_simple(&tampon),
        };
        if let Ok(s) = sortie {
            assert!(
                s.affichage.parse::<f64>().is_ok() || est_sentinelle(&s.affichage),
                "tampon={tampon:?} affichage={:?}",
                s.affichage
            );
            assert!(!s.entree.calcul.is_empty());
        }
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut r1 = Rng::new(42);
    let mut r2 = Rng::new(42);
    for _ in 0..50 {
        let (e1, _) = gen_expr(&mut r1, 3);
        let (e2, _) = gen_expr(&mut r2, 3);
        assert_eq!(e1, e2);
        assert_eq!(calculer_simple(&e1), calculer_simple(&e2));
    }
}
