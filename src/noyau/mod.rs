//! Noyau flottant : infixe -> postfixe -> valeur
//!
//! Organisation interne :
//! - jetons.rs   : tokenisation (nombre, opérateur, parenthèse)
//! - rpn.rs      : shunting-yard + évaluation RPN
//! - erreur.rs   : erreurs typées (limitées à une ligne)
//! - format.rs   : affichage d’un résultat (11.0, 1.0E7, Infinity…)
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use eval::evaluer_ligne;
pub use format::format_resultat;
