//! src/app/etat.rs
//!
//! État de la fenêtre (sans vue) : opération choisie, champs saisis, sorties.
//!
//! Contrats :
//! - Aucun egui ici : tout est testable sans fenêtre.
//! - Même dispatcher et mêmes messages que la session texte.
//! - Un champ illisible donne « Invalid input », sans calcul.

use crate::config::Config;
use crate::noyau::format::{self, MSG_ENTREE_INVALIDE};
use crate::noyau::lecture::{lire_entier, lire_reel};
use crate::noyau::{chercher, traiter, Champ, Issue, Operandes};

/// Opération sélectionnée au lancement (Legendre).
const CODE_DEFAUT: i32 = 22;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- sélection + saisie ---
    pub code: i32,
    pub champ_a: String,
    pub champ_b: String,
    pub champ_n: String,

    // --- sorties ---
    pub resultat: String, // ligne « Result: … » ou bloc informatif
    pub exact: String,    // « Exact: … » (Legendre seulement)
    pub erreur: String,   // erreur de domaine ou entrée illisible

    // --- paramètres ---
    pub precision: usize,
    pub afficher_exact: bool,

    // --- UX ---
    pub focus_entree: bool,
    pub quitter: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppCalc {
    pub fn new(config: &Config) -> Self {
        Self {
            code: CODE_DEFAUT,
            champ_a: String::new(),
            champ_b: String::new(),
            champ_n: String::new(),
            resultat: String::new(),
            exact: String::new(),
            erreur: String::new(),
            precision: config.precision,
            afficher_exact: config.exact,
            focus_entree: true,
            quitter: false,
        }
    }

    pub fn champ_mut(&mut self, champ: Champ) -> &mut String {
        match champ {
            Champ::A => &mut self.champ_a,
            Champ::B => &mut self.champ_b,
            Champ::N => &mut self.champ_n,
        }
    }

    /// C : efface la saisie (pas les sorties).
    pub fn clear_entree(&mut self) {
        self.champ_a.clear();
        self.champ_b.clear();
        self.champ_n.clear();
        self.focus_entree = true;
    }

    /// CLR : efface résultat + exact + erreur.
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.exact.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// AC : tout, sauf la précision.
    pub fn reset_total(&mut self) {
        self.code = CODE_DEFAUT;
        self.clear_entree();
        self.clear_resultats();
    }

    /// Changement d’opération : les anciennes sorties ne s’appliquent plus.
    pub fn choisir(&mut self, code: i32) {
        if self.code != code {
            self.code = code;
            self.clear_resultats();
        }
    }

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.resultat.clear();
        self.exact.clear();
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// Lit les champs déclarés par l’opération choisie, évalue, dépose les sorties.
    pub fn evaluer(&mut self) {
        let Some(op) = chercher(self.code) else {
            self.set_erreur(format::MSG_CHOIX_INVALIDE);
            return;
        };

        let mut o = Operandes::default();
        for inv in op.invites() {
            let texte = match inv.champ {
                Champ::A => &self.champ_a,
                Champ::B => &self.champ_b,
                Champ::N => &self.champ_n,
            };
            let lu = match inv.champ {
                Champ::A => lire_reel(texte).map(|v| o.a = v),
                Champ::B => lire_reel(texte).map(|v| o.b = v),
                Champ::N => lire_entier(texte).map(|v| o.n = v),
            };
            if lu.is_none() {
                log::warn!("champ illisible pour le code {}: {texte:?}", self.code);
                self.set_erreur(MSG_ENTREE_INVALIDE);
                return;
            }
        }

        let issue = traiter(self.code, &o);
        log::debug!("fenêtre : code {}, {o:?} -> {issue:?}", self.code);

        match issue {
            Issue::Erreur(_) | Issue::ChoixInvalide => {
                self.set_erreur(format::message(&issue, self.precision));
            }
            Issue::Sortie => {
                self.quitter = true;
            }
            Issue::Resultat { .. } | Issue::NonSupporte => {
                self.erreur.clear();
                self.resultat = format::message(&issue, self.precision);
                self.exact = if self.afficher_exact {
                    format::ligne_exacte(self.code, &issue, &self.champ_a).unwrap_or_default()
                } else {
                    String::new()
                };
            }
        }

        self.focus_entree = true;
    }
}
