// src/app.rs
//
// Calculatrice RPN — boucle ligne à ligne
// ---------------------------------------
// Rôle:
// - Lire une expression par ligne, jusqu’à "exit" ou la fin du flux
// - Écrire chaque résultat sur `sortie`
// - Écrire les diagnostics (mots rejetés, erreurs) sur `diag`
//
// Important:
// - Une erreur ne touche que SA ligne : la boucle continue.
// - Seules les erreurs d’I/O remontent.

pub mod etat;

pub use etat::Bilan;

use std::io::{self, BufRead, Write};

use crate::noyau::{evaluer_ligne, format_resultat};

/// Ligne qui termine la session (sans sortie).
const COMMANDE_SORTIE: &str = "exit";

pub fn lancer<R, W, D>(mut entree: R, sortie: &mut W, diag: &mut D) -> io::Result<Bilan>
where
    R: BufRead,
    W: Write,
    D: Write,
{
    let mut bilan = Bilan::default();
    let mut brut: Vec<u8> = Vec::new();

    loop {
        brut.clear();
        if entree.read_until(b'\n', &mut brut)? == 0 {
            break;
        }

        // octets non UTF-8 => U+FFFD : le mot fautif sera rejeté, pas la session
        let ligne = String::from_utf8_lossy(&brut);
        let texte = ligne.trim();

        if texte == COMMANDE_SORTIE {
            bilan.noter_sortie();
            break;
        }
        // Écart voulu avec le pipeline : evaluer_ligne("") donnerait
        // InsufficientOperands, mais une ligne vide n’affiche rien.
        if texte.is_empty() {
            continue;
        }

        let ev = evaluer_ligne(texte);

        bilan.noter_rejets(ev.rejets.len());
        for rejet in &ev.rejets {
            writeln!(diag, "{rejet}")?;
        }

        match ev.resultat {
            Ok(v) => {
                bilan.noter_resultat();
                writeln!(sortie, "{}", format_resultat(v))?;
            }
            Err(e) => {
                bilan.noter_erreur();
                tracing::debug!(ligne = texte, erreur = %e, "ligne interrompue");
                writeln!(diag, "Erreur : {e}")?;
            }
        }
    }

    sortie.flush()?;
    Ok(bilan)
}
