// src/app/terminal.rs
//
// Session texte interactive : menu -> choix -> opérandes -> résultat -> séparateur.
//
// - Générique sur BufRead / Write : testable sans sous-processus.
// - Lecture par jetons (séparés par des blancs), comme un flux scanf :
//   plusieurs opérandes peuvent être tapées sur une même ligne.
// - Jeton illisible : on purge le reste de la ligne, message, retour au menu.
// - Code 0 ou fin de flux : fin normale de la boucle (pas de process::exit).

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::config::Config;
use crate::noyau::format::{self, MSG_ENTREE_INVALIDE, SEPARATEUR};
use crate::noyau::lecture::{lire_code, lire_entier, lire_reel};
use crate::noyau::{chercher, traiter, Champ, Issue, Operandes, CATALOGUE};

/// Pourquoi la session s’est terminée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fin {
    /// Code 0 choisi.
    Sortie,
    /// Plus rien à lire.
    FinDeFlux,
}

/// Lecteur de jetons avec purge de la ligne en cours.
struct Lecteur<R> {
    source: R,
    en_attente: VecDeque<String>,
}

impl<R: BufRead> Lecteur<R> {
    fn new(source: R) -> Self {
        Self {
            source,
            en_attente: VecDeque::new(),
        }
    }

    /// Prochain jeton ; None en fin de flux.
    fn jeton(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(j) = self.en_attente.pop_front() {
                return Ok(Some(j));
            }

            let mut ligne = String::new();
            if self.source.read_line(&mut ligne)? == 0 {
                return Ok(None);
            }
            self.en_attente
                .extend(ligne.split_whitespace().map(str::to_owned));
        }
    }

    /// Jette ce qui reste de la ligne courante.
    fn purger(&mut self) {
        self.en_attente.clear();
    }
}

/// Une invite lue : soit une valeur, soit une entrée illisible, soit la fin du flux.
enum Lu {
    Ok,
    Illisible,
    Fin,
}

fn invite<W: Write>(sortie: &mut W, texte: &str) -> io::Result<()> {
    write!(sortie, "{texte}")?;
    sortie.flush()
}

/// Lit les opérandes déclarées par l’entrée du catalogue.
/// `texte_x` reçoit l’écriture brute de l’opérande a (pour l’affichage exact).
fn lire_operandes<R: BufRead, W: Write>(
    code: i32,
    lecteur: &mut Lecteur<R>,
    sortie: &mut W,
    o: &mut Operandes,
    texte_x: &mut String,
) -> io::Result<Lu> {
    let Some(op) = chercher(code) else {
        return Ok(Lu::Ok);
    };

    for inv in op.invites() {
        invite(sortie, inv.texte)?;

        let Some(j) = lecteur.jeton()? else {
            return Ok(Lu::Fin);
        };

        let lu = match inv.champ {
            Champ::A => lire_reel(&j).map(|v| {
                o.a = v;
                texte_x.clone_from(&j);
            }),
            Champ::B => lire_reel(&j).map(|v| o.b = v),
            Champ::N => lire_entier(&j).map(|v| o.n = v),
        };

        if lu.is_none() {
            warn!("opérande illisible pour le code {code}: {j:?}");
            return Ok(Lu::Illisible);
        }
    }

    Ok(Lu::Ok)
}

/// Boucle principale. Retourne la raison de fin ; seules les erreurs d’E/S remontent.
pub fn lancer<R: BufRead, W: Write>(entree: R, sortie: &mut W, config: &Config) -> io::Result<Fin> {
    let mut lecteur = Lecteur::new(entree);
    let menu = format::menu(CATALOGUE);

    info!("session démarrée (précision {})", config.precision);

    loop {
        if config.afficher_menu {
            write!(sortie, "{menu}")?;
        }
        invite(sortie, "\nEnter your choice (0-28): ")?;

        let Some(jeton) = lecteur.jeton()? else {
            info!("fin de flux : session terminée");
            return Ok(Fin::FinDeFlux);
        };

        let Some(code) = lire_code(&jeton) else {
            warn!("choix illisible: {jeton:?}");
            lecteur.purger();
            writeln!(sortie, "{MSG_ENTREE_INVALIDE}\n")?;
            continue;
        };

        writeln!(sortie)?;

        let mut o = Operandes::default();
        let mut texte_x = String::new();
        match lire_operandes(code, &mut lecteur, sortie, &mut o, &mut texte_x)? {
            Lu::Ok => {}
            Lu::Illisible => {
                lecteur.purger();
                writeln!(sortie, "\n{MSG_ENTREE_INVALIDE}\n")?;
                continue;
            }
            Lu::Fin => {
                writeln!(sortie)?;
                info!("fin de flux pendant la saisie : session terminée");
                return Ok(Fin::FinDeFlux);
            }
        }

        let issue = traiter(code, &o);
        debug!("code {code}, {o:?} -> {issue:?}");

        writeln!(sortie, "{}", format::message(&issue, config.precision))?;

        if issue == Issue::Sortie {
            info!("sortie demandée");
            return Ok(Fin::Sortie);
        }

        if config.exact {
            if let Some(ligne) = format::ligne_exacte(code, &issue, &texte_x) {
                writeln!(sortie, "{ligne}")?;
            }
        }

        writeln!(sortie, "\n{SEPARATEUR}\n")?;
    }
}
