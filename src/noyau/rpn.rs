// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfixe)
// - Puis évaluer la RPN avec une pile de flottants
//
// Règles:
// - précédence : ^ > * / > + -
// - associativité : ^ à droite, les autres à gauche
// - aucune parenthèse ne sort en RPN

use super::erreur::ErreurCalcul;
use super::jetons::{Associativite, Operateur, Parenthese, Tok};

/// Ce que la pile d’opérateurs a le droit de contenir.
#[derive(Clone, Copy, Debug)]
enum EntreePile {
    Op(Operateur),
    Ouvrante,
}

/// L’opérateur au sommet doit-il sortir avant d’empiler `entrant` ?
fn doit_sortir(sommet: Operateur, entrant: Operateur) -> bool {
    match entrant.associativite() {
        Associativite::Gauche => sommet.precedence() >= entrant.precedence(),
        Associativite::Droite => sommet.precedence() > entrant.precedence(),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Plus, Num(4), Fois, Num(2)]
///   rpn:    [Num(3), Num(4), Num(2), Fois, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<EntreePile> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Par(Parenthese::Ouvrante) => ops.push(EntreePile::Ouvrante),

            Tok::Par(Parenthese::Fermante) => {
                // dépile jusqu’à '(' (qui est jetée)
                loop {
                    match ops.pop() {
                        Some(EntreePile::Ouvrante) => break,
                        Some(EntreePile::Op(op)) => out.push(Tok::Op(op)),
                        None => {
                            return Err(ErreurCalcul::UnbalancedParenthesis {
                                orpheline: Parenthese::Fermante,
                            })
                        }
                    }
                }
            }

            Tok::Op(entrant) => {
                // '(' bloque toujours la descente
                while let Some(&EntreePile::Op(sommet)) = ops.last() {
                    if !doit_sortir(sommet, entrant) {
                        break;
                    }
                    ops.pop();
                    out.push(Tok::Op(sommet));
                }
                ops.push(EntreePile::Op(entrant));
            }
        }
    }

    // vide la pile ops
    while let Some(entree) = ops.pop() {
        match entree {
            EntreePile::Op(op) => out.push(Tok::Op(op)),
            EntreePile::Ouvrante => {
                return Err(ErreurCalcul::UnbalancedParenthesis {
                    orpheline: Parenthese::Ouvrante,
                })
            }
        }
    }

    Ok(out)
}

/// Évalue une RPN.
///
/// - opérateur : a = premier dépilé (droite), b = second (gauche), empile `b OP a`
/// - moins de deux valeurs pour un opérateur => InsufficientOperands
/// - à la fin, il doit rester exactement une valeur
pub fn evaluate_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for &tok in rpn {
        match tok {
            Tok::Num(v) => st.push(v),

            Tok::Op(op) => {
                let a = st.pop();
                let b = st.pop();
                match (b, a) {
                    (Some(b), Some(a)) => st.push(op.appliquer(b, a)),
                    (b, a) => {
                        return Err(ErreurCalcul::InsufficientOperands {
                            attendus: 2,
                            trouves: usize::from(a.is_some()) + usize::from(b.is_some()),
                        })
                    }
                }
            }

            Tok::Par(p) => return Err(ErreurCalcul::UnbalancedParenthesis { orpheline: p }),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        reste => Err(ErreurCalcul::InsufficientOperands {
            attendus: 1,
            trouves: reste.len(),
        }),
    }
}
