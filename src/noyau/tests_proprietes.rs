//! Propriétés (proptest) : formatage, groupement, nettoyage, édition du tampon.

use proptest::prelude::*;

use super::eval::evaluer_brut;
use super::format::{format_resultat, grouper};
use super::nettoyage::nettoyer;
use super::saisie::{ajouter, effacer_dernier};

/* ------------------------ Stratégies ------------------------ */

fn touche_strategy() -> impl Strategy<Value = Option<char>> {
    prop_oneof![
        8 => prop::sample::select(vec![
            '0', '1', '2', '5', '9', '.', '+', '-', '*', '/', '%', '(', ')', 'x', '=',
        ])
        .prop_map(Some),
        1 => Just(None), // retour arrière
    ]
}

fn brut_strategy() -> impl Strategy<Value = String> {
    "[0-9+*/().% -]{0,24}"
}

proptest! {
    /// Un entier s’écrit sans point décimal, comme son écriture entière.
    #[test]
    fn prop_entier_sans_decimales(n in -1_000_000_000_000i64..1_000_000_000_000i64) {
        let s = format_resultat(n as f64);
        prop_assert!(!s.contains('.'));
        prop_assert_eq!(s, n.to_string());
    }

    /// Au plus 10 décimales, jamais de zéro final.
    #[test]
    fn prop_dix_decimales_au_plus(v in -1.0e6f64..1.0e6f64) {
        let s = format_resultat(v);
        if let Some((_, dec)) = s.split_once('.') {
            prop_assert!(dec.len() <= 10, "{}", s);
            prop_assert!(!dec.ends_with('0'), "{}", s);
        }
        let relu: f64 = s.parse().unwrap();
        prop_assert!((relu - v).abs() <= 5e-11 + f64::EPSILON * v.abs());
    }

    /// Retirer les virgules rend le texte d’origine ; groupes internes de 3 chiffres.
    #[test]
    fn prop_groupement_reversible(n in any::<i64>(), dec in prop::option::of(0u32..10_000)) {
        let brut = match dec {
            Some(d) => format!("{n}.{d}"),
            None => n.to_string(),
        };
        let g = grouper(&brut);
        prop_assert_eq!(g.replace(',', ""), brut.clone());

        let entier = g.trim_start_matches('-').split('.').next().unwrap_or("");
        let groupes: Vec<&str> = entier.split(',').collect();
        prop_assert!(!groupes[0].is_empty() && groupes[0].len() <= 3);
        for grp in &groupes[1..] {
            prop_assert_eq!(grp.len(), 3);
        }
    }

    /// Nettoyer un texte déjà nettoyé ne change rien.
    #[test]
    fn prop_nettoyage_idempotent(brut in brut_strategy()) {
        if let Ok(n) = nettoyer(&brut) {
            prop_assert_eq!(nettoyer(&n), Ok(n.clone()));
        }
    }

    /// Un littéral formaté se relit à l’identique.
    #[test]
    fn prop_litteral_evalue_a_lui_meme(v in -1.0e9f64..1.0e9f64) {
        let lu = evaluer_brut(&v.abs().to_string()).unwrap();
        prop_assert_eq!(lu, v.abs());
    }

    /// Sur tout f64 fini : le résultat formaté repasse le nettoyage et se relit
    /// à la valeur affichée ; un entier se relit exactement.
    #[test]
    fn prop_resultat_formate_reevaluable(
        v in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
    ) {
        let s = format_resultat(v);
        prop_assert!(!s.contains(['e', 'E']), "{}", s);
        prop_assert!(nettoyer(&s).is_ok(), "{}", s);

        let relu = evaluer_brut(&s).unwrap();
        prop_assert_eq!(relu, s.parse::<f64>().unwrap());
        if v.fract() == 0.0 {
            prop_assert!(!s.contains('.'), "{}", s);
            prop_assert_eq!(relu, v);
        }
    }

    /// Jamais plus de `)` que de `(` ; tampon jamais vide.
    #[test]
    fn prop_edition_parentheses(touches in prop::collection::vec(touche_strategy(), 0..40)) {
        let mut t = String::from("0");
        for touche in touches {
            t = match touche {
                Some(c) => ajouter(&t, c),
                None => effacer_dernier(&t),
            };
            prop_assert!(!t.is_empty());
            prop_assert!(t.matches(')').count() <= t.matches('(').count(), "{}", t);
        }
    }
}
