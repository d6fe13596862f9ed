// src/noyau/expr.rs
//
// AST numérique (flottants double précision).
// Pas de variable dans l’arbre : x est substitué AVANT la tokenisation.

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Reste(Box<Expr>, Box<Expr>),     // a % b (signe du dividende)
    Puissance(Box<Expr>, Box<Expr>), // a ** b
}

impl Expr {
    /// Repli numérique direct. Peut produire ±∞ ou NaN : c’est l’adaptateur
    /// (eval.rs) qui décide du rejet.
    pub fn evaluer(&self) -> f64 {
        use Expr::*;

        match self {
            Nombre(v) => *v,
            Neg(a) => -a.evaluer(),
            Add(a, b) => a.evaluer() + b.evaluer(),
            Sub(a, b) => a.evaluer() - b.evaluer(),
            Mul(a, b) => a.evaluer() * b.evaluer(),
            Div(a, b) => a.evaluer() / b.evaluer(),
            Reste(a, b) => a.evaluer() % b.evaluer(),
            Puissance(a, b) => a.evaluer().powf(b.evaluer()),
        }
    }
}
