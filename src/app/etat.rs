//! src/app/etat.rs
//!
//! Bilan de session (sans I/O, sans noyau).
//!
//! Rôle : compter ce que la boucle a vu passer, pour la trace de fin de session
//! et pour les tests de la boucle.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub lignes: usize,         // lignes évaluées (hors vides, hors "exit")
    pub resultats: usize,      // lignes avec une valeur affichée
    pub erreurs: usize,        // lignes interrompues
    pub jetons_rejetes: usize, // mots sautés (toutes lignes confondues)
    pub sortie_demandee: bool, // "exit" lu (sinon : fin du flux)
}

impl Bilan {
    pub fn noter_rejets(&mut self, n: usize) {
        self.jetons_rejetes += n;
    }

    pub fn noter_resultat(&mut self) {
        self.lignes += 1;
        self.resultats += 1;
    }

    pub fn noter_erreur(&mut self) {
        self.lignes += 1;
        self.erreurs += 1;
    }

    pub fn noter_sortie(&mut self) {
        self.sortie_demandee = true;
    }
}
