// src/noyau/format.rs
//
// Affichage : lignes de résultat, messages, menu.
// Pas d’E/S ici : on produit du texte, l’appelant l’écrit.

use num_rational::BigRational;
use num_traits::One;

use super::catalogue::{Issue, Notation, Operandes, Operation, Section, Valeur, CODE_LEGENDRE};
use super::lecture::lire_rationnel;
use super::legendre::{legendre_exact, ORDRE_EXACT_MAX};

pub const SEPARATEUR: &str = "----------------------------------------";

pub const MSG_ENTREE_INVALIDE: &str = "Invalid input. Please enter a number.";
pub const MSG_CHOIX_INVALIDE: &str = "Invalid choice. Please try again.";
pub const MSG_AU_REVOIR: &str = "Exiting calculator. Goodbye!";

/// Bloc informatif des codes 24–28.
pub const MSG_NON_SUPPORTE: &str = "Info: This operation is not supported.\n\
These functions (Derivative, Integral, Grad, etc.) require\n\
a *function* as input, not just numbers. This is a task\n\
for symbolic math software (e.g., Mathematica, Python/SymPy).";

/* ------------------------ Nombres ------------------------ */

/// Réel à précision fixe (6 par défaut, comme %lf).
pub fn reel(x: f64, precision: usize) -> String {
    format!("{x:.precision$}")
}

pub fn rationnel(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

fn valeur(v: &Valeur, precision: usize) -> String {
    match v {
        Valeur::Reel(x) => reel(*x, precision),
        Valeur::Imaginaire(m) => format!("{}i (Imaginary)", reel(*m, precision)),
        Valeur::Complexe(z) => format!(
            "{} + {}i",
            reel(z.re, precision),
            reel(z.im, precision)
        ),
    }
}

/// Membre gauche : « a + b », « sin(x) », « P_2(x) »…
pub fn expression(notation: Notation, o: &Operandes, precision: usize) -> String {
    let a = reel(o.a, precision);
    match notation {
        Notation::Infixe(op) => format!("{a} {op} {}", reel(o.b, precision)),
        Notation::Fonction(f) | Notation::FonctionRadians(f) => format!("{f}({a})"),
        Notation::Indice(f) => format!("{f}_{}({a})", o.n),
        Notation::Reciproque => format!("1 / {a}"),
        Notation::Exponentielle => format!("e^({a})"),
        Notation::ExpComplexe => format!("e^(i*{a})"),
    }
}

/// Ligne complète « Result: … = … ».
pub fn ligne_resultat(notation: Notation, o: &Operandes, v: &Valeur, precision: usize) -> String {
    let suffixe = match notation {
        Notation::FonctionRadians(_) => " RADIANS",
        _ => "",
    };
    format!(
        "Result: {} = {}{suffixe}",
        expression(notation, o, precision),
        valeur(v, precision)
    )
}

/// Texte affiché pour une issue (une ou plusieurs lignes, sans séparateur).
pub fn message(issue: &Issue, precision: usize) -> String {
    match issue {
        Issue::Resultat {
            notation,
            operandes,
            valeur,
        } => ligne_resultat(*notation, operandes, valeur, precision),
        Issue::Erreur(e) => format!("Error: {e}"),
        Issue::NonSupporte => MSG_NON_SUPPORTE.to_string(),
        Issue::ChoixInvalide => MSG_CHOIX_INVALIDE.to_string(),
        Issue::Sortie => MSG_AU_REVOIR.to_string(),
    }
}

/// Ligne « Exact: P_n(x) = p/q » : seulement pour Legendre, pour n ≤ ORDRE_EXACT_MAX,
/// et seulement si l’opérande x a été saisie en décimal fini ou en fraction.
pub fn ligne_exacte(code: i32, issue: &Issue, texte_x: &str) -> Option<String> {
    if code != CODE_LEGENDRE {
        return None;
    }
    let Issue::Resultat { operandes, .. } = issue else {
        return None;
    };
    let n = u32::try_from(operandes.n).ok()?;
    if n > ORDRE_EXACT_MAX {
        log::debug!("affichage exact omis : ordre {n} > {ORDRE_EXACT_MAX}");
        return None;
    }
    let x = lire_rationnel(texte_x)?;
    let v = legendre_exact(n, &x);
    Some(format!("Exact: P_{n}({}) = {}", rationnel(&x), rationnel(&v)))
}

/* ------------------------ Menu ------------------------ */

fn titre_section(s: Section) -> &'static str {
    match s {
        Section::Base => "--- Basic (2 Inputs) ---",
        Section::Standard => "--- Standard (1 Input) ---",
        Section::Speciale => "--- Special Functions ---",
        Section::Avancee => "--- Advanced (Not Implemented) ---",
        Section::Sortie => "-----------------------------------",
    }
}

/// Menu rendu depuis le catalogue : sections dans l’ordre des codes, sortie en dernier.
pub fn menu(catalogue: &[Operation]) -> String {
    let mut out = String::from("===== Scientific Calculator =====\n");
    let mut section: Option<Section> = None;

    let calculables = catalogue.iter().filter(|op| op.section != Section::Sortie);
    let sorties = catalogue.iter().filter(|op| op.section == Section::Sortie);

    for op in calculables.chain(sorties) {
        if section != Some(op.section) {
            out.push('\n');
            out.push_str(titre_section(op.section));
            out.push('\n');
            section = Some(op.section);
        }
        out.push_str(&format!("{:>2}. {}\n", op.code, op.menu));
    }

    out
}
