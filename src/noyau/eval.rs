//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> valeur
//!
//! Les mots rejetés par la tokenisation ne coupent pas la ligne : ils sont
//! rendus à côté du résultat, pour que l’appelant puisse les signaler.

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{evaluate_rpn, to_rpn};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String, // vide si la conversion a échoué
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub resultat: Result<f64, ErreurCalcul>,
    pub rejets: Vec<ErreurCalcul>,
    pub demarche: DemarcheNoyau,
}

/// API publique : évalue une ligne et retourne:
/// - le résultat (ou l’erreur qui a interrompu la ligne)
/// - les mots rejetés (MalformedToken), même en cas d’erreur
/// - la démarche (jetons, rpn)
pub fn evaluer_ligne(ligne: &str) -> Evaluation {
    // 1) Jetons
    let lus = tokenize(ligne);
    let mut demarche = DemarcheNoyau {
        jetons: format_tokens(&lus.jetons),
        rpn: String::new(),
    };

    // 2) RPN puis 3) valeur
    let resultat = to_rpn(&lus.jetons).and_then(|rpn| {
        demarche.rpn = format_tokens(&rpn);
        evaluate_rpn(&rpn)
    });

    tracing::debug!(
        jetons = %demarche.jetons,
        rpn = %demarche.rpn,
        ok = resultat.is_ok(),
        "ligne évaluée"
    );

    Evaluation {
        resultat,
        rejets: lus.rejets,
        demarche,
    }
}

/// Forme courte : seulement la valeur (campagnes de tests).
#[cfg(test)]
pub fn eval_expression(ligne: &str) -> Result<f64, ErreurCalcul> {
    evaluer_ligne(ligne).resultat
}
