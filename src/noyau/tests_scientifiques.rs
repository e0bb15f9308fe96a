//! Tests scientifiques (campagne) : propriétés du pipeline.
//!
//! Référence : un évaluateur DIRECT de la forme infixe (descente récursive),
//! indépendant du shunting-yard. Même précédence, même associativité :
//! - expr   := terme (('+' | '-') terme)*
//! - terme  := fact (('*' | '/') fact)*
//! - fact   := atome ('^' fact)?          (droite)
//! - atome  := nombre | '(' expr ')'
//!
//! Même arbre => mêmes opérations flottantes => égalité stricte (NaN mis à part).

use std::time::{Duration, Instant};

use super::eval::eval_expression;
use super::erreur::ErreurCalcul;

/* ------------------------ Évaluateur de référence ------------------------ */

struct Reference<'a> {
    mots: Vec<&'a str>,
    pos: usize,
}

impl<'a> Reference<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.mots.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<&'a str> {
        let m = self.peek();
        self.pos += 1;
        m
    }

    fn expr(&mut self) -> Option<f64> {
        let mut v = self.terme()?;
        while let Some(op @ ("+" | "-")) = self.peek() {
            self.pos += 1;
            let d = self.terme()?;
            v = if op == "+" { v + d } else { v - d };
        }
        Some(v)
    }

    fn terme(&mut self) -> Option<f64> {
        let mut v = self.fact()?;
        while let Some(op @ ("*" | "/")) = self.peek() {
            self.pos += 1;
            let d = self.fact()?;
            v = if op == "*" { v * d } else { v / d };
        }
        Some(v)
    }

    fn fact(&mut self) -> Option<f64> {
        let base = self.atome()?;
        if self.peek() == Some("^") {
            self.pos += 1;
            let exp = self.fact()?;
            return Some(base.powf(exp));
        }
        Some(base)
    }

    fn atome(&mut self) -> Option<f64> {
        match self.next()? {
            "(" => {
                let v = self.expr()?;
                (self.next()? == ")").then_some(v)
            }
            m => m.parse::<f64>().ok(),
        }
    }
}

/// Évalue directement une expression bien formée (mots séparés par espaces).
pub(super) fn eval_reference(s: &str) -> Option<f64> {
    let mut r = Reference {
        mots: s.split_whitespace().collect(),
        pos: 0,
    };
    let v = r.expr()?;
    (r.pos == r.mots.len()).then_some(v)
}

pub(super) fn meme_flottant(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/* ------------------------ Helpers ------------------------ */

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_aller_retour(expr: &str) {
    let pipeline = eval_ok(expr);
    let reference = eval_reference(expr).unwrap_or_else(|| panic!("référence KO: {expr:?}"));
    assert!(
        meme_flottant(pipeline, reference),
        "expr={expr:?} pipeline={pipeline} référence={reference}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn sci_nombre_seul_identite() {
    for v in [0.0, 1.0, -3.5, 1e-9, 6.02e23, 123456.789] {
        let s = format!("{v}");
        assert_eq!(eval_ok(&s), v, "s={s:?}");
    }
}

#[test]
fn sci_exemples_manuels() {
    assert_eq!(eval_ok("3 + 4 * 2"), 11.0);
    assert_eq!(eval_ok("( 3 + 4 ) * 2"), 14.0);
    assert_eq!(eval_ok("2 ^ 3"), 8.0);
    assert_eq!(eval_ok("100 / 10 / 5"), 2.0);
    assert_eq!(eval_ok("2 * ( 3 + 4 ) ^ 2 - 1"), 97.0);
}

#[test]
fn sci_aller_retour_reference() {
    for expr in [
        "1 + 2 - 3 + 4",
        "1 - 2 * 3 / 4 + 5",
        "( 1 - 2 ) * ( 3 / ( 4 + 5 ) )",
        "2 ^ 3 ^ 2",
        "2 ^ -1 ^ 2",
        "0.1 + 0.2 * 0.3",
        "7 / 0 - 1",
        "( ( ( 2 ) ) ) ^ 0.5",
        "1 / 3 * 3 - 1",
    ] {
        assert_aller_retour(expr);
    }
}

#[test]
fn sci_parentheses_non_equilibrees() {
    for expr in ["( 3 + 4", "3 + 4 )", "( ( 1 )", ") 1 (", "( )  )"] {
        assert!(
            matches!(
                eval_expression(expr),
                Err(ErreurCalcul::UnbalancedParenthesis { .. })
            ),
            "expr={expr:?}"
        );
    }
}

#[test]
fn sci_operandes_insuffisants() {
    for expr in ["3 + @", "+", "3 4", "( ) + 1", ""] {
        assert!(
            matches!(
                eval_expression(expr),
                Err(ErreurCalcul::InsufficientOperands { .. })
            ),
            "expr={expr:?}"
        );
    }
}

#[test]
fn sci_division_par_zero_flottante() {
    assert_eq!(eval_ok("1 / 0"), f64::INFINITY);
    assert_eq!(eval_ok("-1 / 0"), f64::NEG_INFINITY);
    assert!(eval_ok("0 / 0").is_nan());
}

#[test]
fn sci_longue_chaine_gauche() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // 1 - 1 - 1 ... (2000 termes) : gauche => 1 - 1999
    let expr = std::iter::repeat("1").take(2000).collect::<Vec<_>>().join(" - ");
    assert_eq!(eval_ok(&expr), -1998.0);

    // parenthèses profondes : la conversion est itérative, pas de récursion
    let n = 5000;
    let expr = format!("{} 1 {}", "( ".repeat(n), " )".repeat(n));
    assert_eq!(eval_ok(&expr), 1.0);

    budget(t0, max);
}
