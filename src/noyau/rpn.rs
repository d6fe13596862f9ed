// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Précédences (de la plus faible à la plus forte):
//   + -      : 1 (gauche)
//   * / %    : 2 (gauche)
//   - unaire : 3 (préfixe)
//   **       : 4 (droite)
// Donc -2**2 = -(2**2) et 2**-1 = 2**(-1).
//
// Le + unaire est ignoré. Deux valeurs consécutives ("2(3)", "(1)(2)") sont refusées :
// la multiplication implicite n’existe qu’au niveau de la substitution de x (eval.rs).

use super::expr::Expr;
use super::jetons::Tok;

/// Jeton de sortie RPN : les jetons de la grammaire + la négation unaire.
#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Tok(Tok),
    Neg,
}

/// Élément de la pile d’opérateurs.
#[derive(Clone, Debug, PartialEq)]
enum Pile {
    Op(Tok),
    Neg,
    LPar,
}

fn precedence(p: &Pile) -> i32 {
    match p {
        Pile::Op(Tok::Plus | Tok::Minus) => 1,
        Pile::Op(Tok::Star | Tok::Slash | Tok::Percent) => 2,
        Pile::Neg => 3,
        Pile::Op(Tok::Caret) => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

fn sortie(p: Pile) -> Result<Rpn, String> {
    match p {
        Pile::Op(t) => Ok(Rpn::Tok(t)),
        Pile::Neg => Ok(Rpn::Neg),
        Pile::LPar => Err("parenthèses non fermées".into()),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>, String> {
    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter les opérateurs unaires et les opérandes manquants.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err("opérateur manquant".into());
                }
                out.push(Rpn::Tok(tok));
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err("opérateur manquant avant '('".into());
                }
                ops.push(Pile::LPar);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err("opérande manquant avant ')'".into());
                }
                // dépile jusqu’à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if top == Pile::LPar {
                        fermee = true;
                        break;
                    }
                    out.push(sortie(top)?);
                }
                if !fermee {
                    return Err("parenthèse fermante sans ouvrante".into());
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // unaire : + ignoré, - devient Neg (préfixe, ne dépile rien)
                if tok == Tok::Minus {
                    ops.push(Pile::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                if !prev_was_value {
                    return Err("opérande manquant".into());
                }

                let courant = Pile::Op(tok.clone());
                let p_tok = precedence(&courant);

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if *top == Pile::LPar {
                        break;
                    }
                    let p_top = precedence(top);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(sortie(top)?);
                    }
                }

                ops.push(courant);
                prev_was_value = false;
            }
        }
    }

    if !prev_was_value {
        return Err("expression incomplète".into());
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(sortie(op)?);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Rpn]) -> Result<Expr, String> {
    let mut st: Vec<Expr> = Vec::new();

    for r in rpn.iter().cloned() {
        match r {
            Rpn::Tok(Tok::Num(v)) => st.push(Expr::Nombre(v)),

            Rpn::Neg => {
                let a = st.pop().ok_or("négation sans argument")?;
                st.push(Expr::Neg(Box::new(a)));
            }

            Rpn::Tok(op) => {
                let b = st.pop().ok_or("expression invalide")?;
                let a = st.pop().ok_or("expression invalide")?;
                let (a, b) = (Box::new(a), Box::new(b));

                let e = match op {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    Tok::Percent => Expr::Reste(a, b),
                    Tok::Caret => Expr::Puissance(a, b),
                    Tok::Num(_) | Tok::LPar | Tok::RPar => {
                        return Err("jeton inattendu en RPN".into())
                    }
                };
                st.push(e);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        _ => Err("expression invalide".into()),
    }
}
