// src/main.rs
//
// Calculatrice RPN — point d’entrée console
// -----------------------------------------
// But:
// - stdin  : une expression par ligne ("exit" pour quitter)
// - stdout : un résultat par ligne
// - stderr : diagnostics + traces (RUST_LOG=debug pour voir la démarche)

use std::io;

use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

/// Filtre de traces si RUST_LOG est absent ou invalide.
const FILTRE_LOG_DEFAUT: &str = "warn";

/* ------------------------ Traces ------------------------ */

fn installer_traces() {
    let filtre = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(FILTRE_LOG_DEFAUT));

    // stdout reste réservé aux résultats
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .init();
}

/* ------------------------ Entrée ------------------------ */

fn main() -> io::Result<()> {
    installer_traces();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let bilan = app::lancer(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())?;

    tracing::info!(
        lignes = bilan.lignes,
        resultats = bilan.resultats,
        erreurs = bilan.erreurs,
        jetons_rejetes = bilan.jetons_rejetes,
        exit = bilan.sortie_demandee,
        "fin de session"
    );

    Ok(())
}
