// src/noyau/erreur.rs

use thiserror::Error;

use super::jetons::Parenthese;

/// Erreurs du noyau, toutes limitées à UNE ligne d’entrée.
///
/// - `MalformedToken` : récupérée sur place (le mot est sauté, la lecture continue).
/// - `UnbalancedParenthesis` / `InsufficientOperands` : interrompent la ligne.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurCalcul {
    #[error("jeton d’entrée incorrect : {mot:?}")]
    MalformedToken { mot: String },

    #[error("{}", message_parenthese(.orpheline))]
    UnbalancedParenthesis { orpheline: Parenthese },

    #[error("nombre d’opérandes incorrect : {attendus} attendu(s), {trouves} sur la pile")]
    InsufficientOperands { attendus: usize, trouves: usize },
}

fn message_parenthese(orpheline: &Parenthese) -> &'static str {
    match orpheline {
        Parenthese::Ouvrante => "parenthèses non fermées",
        Parenthese::Fermante => "parenthèse fermante sans ouvrante",
    }
}
