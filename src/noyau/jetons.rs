// src/noyau/jetons.rs

use std::fmt;

use num_traits::Float;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

/// Opérateurs reconnus (ensemble fixe).
pub const OPERATEURS: [Operateur; 5] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
    Operateur::Puissance,
];

impl Operateur {
    /// Opérateur correspondant à un mot d’UN seul symbole ("+", "^", ...).
    pub fn depuis_mot(mot: &str) -> Option<Self> {
        let mut chars = mot.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        OPERATEURS.into_iter().find(|op| op.symbole() == c)
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise => 2,
            Self::Puissance => 3,
        }
    }

    /// `^` groupe à droite : 2 ^ 3 ^ 2 = 2 ^ (3 ^ 2).
    pub fn associativite(self) -> Associativite {
        match self {
            Self::Puissance => Associativite::Droite,
            _ => Associativite::Gauche,
        }
    }

    /// Calcule `b OP a` (b = opérande gauche, a = opérande droite).
    /// Division par zéro : sémantique flottante (inf / NaN), jamais d’erreur.
    pub fn appliquer<T: Float>(self, b: T, a: T) -> T {
        match self {
            Self::Plus => b + a,
            Self::Moins => b - a,
            Self::Fois => b * a,
            Self::Divise => b / a,
            Self::Puissance => b.powf(a),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parenthese {
    Ouvrante,
    Fermante,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    Par(Parenthese),
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::Par(Parenthese::Ouvrante) => f.write_str("("),
            Tok::Par(Parenthese::Fermante) => f.write_str(")"),
        }
    }
}

/// Résultat de la tokenisation : jetons retenus + mots rejetés.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Jetons {
    pub jetons: Vec<Tok>,
    pub rejets: Vec<ErreurCalcul>,
}

/// Tokenize une ligne : découpe sur les espaces, puis classe chaque mot.
///
/// Ordre de classement (important) : nombre → opérateur → parenthèse → rejet.
/// Le nombre passe en premier, sinon "-3" serait pris pour un opérateur.
///
/// Un mot rejeté ne coupe pas la ligne : il est noté dans `rejets` et sauté.
pub fn tokenize(s: &str) -> Jetons {
    let mut out = Jetons::default();

    for mot in s.split_whitespace() {
        match classer(mot) {
            Some(tok) => out.jetons.push(tok),
            None => {
                tracing::debug!(mot, "jeton rejeté");
                out.rejets.push(ErreurCalcul::MalformedToken {
                    mot: mot.to_string(),
                });
            }
        }
    }

    out
}

fn classer(mot: &str) -> Option<Tok> {
    if let Ok(v) = mot.parse::<f64>() {
        return Some(Tok::Num(v));
    }
    if let Some(op) = Operateur::depuis_mot(mot) {
        return Some(Tok::Op(op));
    }
    match mot {
        "(" => Some(Tok::Par(Parenthese::Ouvrante)),
        ")" => Some(Tok::Par(Parenthese::Fermante)),
        _ => None,
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
