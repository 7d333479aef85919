//! Noyau — catalogue des opérations (table déclarative)
//!
//! Une entrée = { code, libellé de menu, section, forme }.
//! Une forme calculable déclare ses invites (arité + ordre de lecture),
//! sa notation (affichage) et son évaluation (contrôle de domaine + calcul).
//!
//! Codes 24–28 : jamais calculés (il faudrait une *fonction* en entrée).
//! Code 0 : signal de fin de boucle, pas de sortie de processus.

use num_complex::Complex64;

use super::erreur::ErreurDomaine;
use super::legendre::legendre;

use Notation::*;
use Section::{Base, Speciale, Standard};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Base,
    Standard,
    Speciale,
    Avancee,
    Sortie,
}

/// Quel opérande une invite remplit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Champ {
    A,
    B,
    N,
}

#[derive(Clone, Copy, Debug)]
pub struct Invite {
    pub champ: Champ,
    pub texte: &'static str,
}

/// Opérandes d’une requête. Seuls les champs déclarés par les invites sont lus.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Operandes {
    pub a: f64,
    pub b: f64,
    pub n: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Valeur {
    Reel(f64),
    /// √x pour x < 0 : module de la partie imaginaire
    Imaginaire(f64),
    Complexe(Complex64),
}

/// Comment écrire le membre gauche de « Result: … = … ».
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// a op b
    Infixe(&'static str),
    /// f(a)
    Fonction(&'static str),
    /// f(a), résultat en radians
    FonctionRadians(&'static str),
    /// f_n(a)
    Indice(&'static str),
    /// 1 / a
    Reciproque,
    /// e^(a)
    Exponentielle,
    /// e^(i*a)
    ExpComplexe,
}

pub type Evaluation = fn(&Operandes) -> Result<Valeur, ErreurDomaine>;

#[derive(Clone, Copy)]
pub enum Forme {
    Calcul {
        invites: &'static [Invite],
        notation: Notation,
        eval: Evaluation,
    },
    NonSupportee,
    Sortie,
}

#[derive(Clone, Copy)]
pub struct Operation {
    pub code: i32,
    pub menu: &'static str,
    pub section: Section,
    pub forme: Forme,
}

impl Operation {
    /// Invites à poser avant l’évaluation (vide si non calculable).
    pub fn invites(&self) -> &'static [Invite] {
        match self.forme {
            Forme::Calcul { invites, .. } => invites,
            Forme::NonSupportee | Forme::Sortie => &[],
        }
    }
}

/// Issue d’une requête (code + opérandes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Issue {
    Resultat {
        notation: Notation,
        operandes: Operandes,
        valeur: Valeur,
    },
    Erreur(ErreurDomaine),
    NonSupporte,
    ChoixInvalide,
    Sortie,
}

/* ------------------------ Invites ------------------------ */

const fn inv(champ: Champ, texte: &'static str) -> Invite {
    Invite { champ, texte }
}

const INV_AB: &[Invite] = &[
    inv(Champ::A, "Enter first number (a): "),
    inv(Champ::B, "Enter second number (b): "),
];
const INV_DIVISION: &[Invite] = &[
    inv(Champ::A, "Enter numerator (a): "),
    inv(Champ::B, "Enter denominator (b): "),
];
const INV_PUISSANCE: &[Invite] = &[
    inv(Champ::A, "Enter base (x): "),
    inv(Champ::B, "Enter exponent (n): "),
];
const INV_EXPOSANT: &[Invite] = &[inv(Champ::A, "Enter exponent (x): ")];
const INV_NOMBRE: &[Invite] = &[inv(Champ::A, "Enter number (x): ")];
const INV_ANGLE: &[Invite] = &[inv(Champ::A, "Enter angle in RADIANS (x): ")];
const INV_UNITE: &[Invite] = &[inv(Champ::A, "Enter value (x) [-1 to 1]: ")];
const INV_VALEUR: &[Invite] = &[inv(Champ::A, "Enter value (x): ")];
const INV_BESSEL: &[Invite] = &[
    inv(Champ::N, "Enter integer order (n): "),
    inv(Champ::A, "Enter value (x): "),
];
const INV_LEGENDRE: &[Invite] = &[
    inv(Champ::N, "Enter integer order (n >= 0): "),
    inv(Champ::A, "Enter value (x) [-1 to 1]: "),
];
const INV_EXP_COMPLEXE: &[Invite] = &[inv(Champ::A, "Enter value (x) for e^(ix): ")];

/* ------------------------ Évaluations ------------------------ */

fn reel(v: f64) -> Result<Valeur, ErreurDomaine> {
    Ok(Valeur::Reel(v))
}

/// NaN n’est pas dans [-1, 1] : asin / acos le rejettent,
/// alors que ln le laisse passer (NaN n’est pas ≤ 0).
fn dans_unite(x: f64, fonction: &'static str) -> Result<(), ErreurDomaine> {
    if (-1.0..=1.0).contains(&x) {
        Ok(())
    } else {
        Err(ErreurDomaine::HorsIntervalle { fonction })
    }
}

fn division(o: &Operandes) -> Result<Valeur, ErreurDomaine> {
    if o.b == 0.0 {
        return Err(ErreurDomaine::DivisionParZero);
    }
    reel(o.a / o.b)
}

fn logarithme(o: &Operandes) -> Result<Valeur, ErreurDomaine> {
    // NaN n’est pas <= 0 : il passe et donne NaN, comme log(NaN)
    if o.a <= 0.0 {
        return Err(ErreurDomaine::LogarithmeNonPositif);
    }
    reel(o.a.ln())
}

fn arcsin(o: &Operandes) -> Result<Valeur, ErreurDomaine> {
    dans_unite(o.a, "asin")?;
    reel(o.a.asin())
}

fn arccos(o: &Operandes) -> Result<Valeur, ErreurDomaine> {
    dans_unite(o.a, "acos")?;
    reel(o.a.acos())
}

fn reciproque(o: &Operandes) -> Result<Valeur, ErreurDomaine> {
    if o.a == 0.0 {
        return Err(ErreurDomaine::DivisionParZero);
    }
    reel(1.0 / o.a)
}

fn racine(o: &Operandes) -> Result<Valeur, ErreurDomaine> {
    if o.a < 0.0 {
        Ok(Valeur::Imaginaire((-o.a).sqrt()))
    } else {
        reel(o.a.sqrt())
    }
}

fn legendre_op(o: &Operandes) -> Result<Valeur, ErreurDomaine> {
    let n = u32::try_from(o.n).map_err(|_| ErreurDomaine::OrdreNegatif)?;
    reel(legendre(n, o.a))
}

fn exp_complexe(o: &Operandes) -> Result<Valeur, ErreurDomaine> {
    Ok(Valeur::Complexe((Complex64::i() * o.a).exp()))
}

/* ------------------------ Table ------------------------ */

const fn calcul(
    code: i32,
    menu: &'static str,
    section: Section,
    invites: &'static [Invite],
    notation: Notation,
    eval: Evaluation,
) -> Operation {
    Operation {
        code,
        menu,
        section,
        forme: Forme::Calcul {
            invites,
            notation,
            eval,
        },
    }
}

const fn avancee(code: i32, menu: &'static str) -> Operation {
    Operation {
        code,
        menu,
        section: Section::Avancee,
        forme: Forme::NonSupportee,
    }
}

/// Seule entrée dont la valeur existe aussi sous forme exacte (sur Q).
pub const CODE_LEGENDRE: i32 = 22;

/// Catalogue complet, trié par code. Une ligne par entrée.
#[rustfmt::skip]
pub static CATALOGUE: &[Operation] = &[
    Operation {
        code: 0,
        menu: "Exit",
        section: Section::Sortie,
        forme: Forme::Sortie,
    },
    // --- Base (2 opérandes) ---
    calcul(1, "Add (a + b)", Base, INV_AB, Infixe("+"), |o| reel(o.a + o.b)),
    calcul(2, "Subtract (a - b)", Base, INV_AB, Infixe("-"), |o| reel(o.a - o.b)),
    calcul(3, "Multiply (a * b)", Base, INV_AB, Infixe("*"), |o| reel(o.a * o.b)),
    calcul(4, "Divide (a / b)", Base, INV_DIVISION, Infixe("/"), division),
    calcul(5, "Power (x^n)", Base, INV_PUISSANCE, Infixe("^"), |o| reel(o.a.powf(o.b))),
    // --- Standard (1 opérande) ---
    calcul(6, "Exponential (e^x)", Standard, INV_EXPOSANT, Exponentielle, |o| reel(o.a.exp())),
    calcul(7, "Natural Log (ln x)", Standard, INV_NOMBRE, Fonction("ln"), logarithme),
    calcul(8, "Sine (sin x)      [x in RADIANS]", Standard, INV_ANGLE, Fonction("sin"), |o| reel(o.a.sin())),
    calcul(9, "Cosine (cos x)    [x in RADIANS]", Standard, INV_ANGLE, Fonction("cos"), |o| reel(o.a.cos())),
    calcul(10, "Tangent (tan x)   [x in RADIANS]", Standard, INV_ANGLE, Fonction("tan"), |o| reel(o.a.tan())),
    calcul(11, "Arcsin (asin x)", Standard, INV_UNITE, FonctionRadians("asin"), arcsin),
    calcul(12, "Arccos (acos x)", Standard, INV_UNITE, FonctionRadians("acos"), arccos),
    calcul(13, "Arctan (atan x)", Standard, INV_VALEUR, FonctionRadians("atan"), |o| reel(o.a.atan())),
    calcul(14, "Hyperbolic Sine (sinh x)", Standard, INV_NOMBRE, Fonction("sinh"), |o| reel(o.a.sinh())),
    calcul(15, "Hyperbolic Cosine (cosh x)", Standard, INV_NOMBRE, Fonction("cosh"), |o| reel(o.a.cosh())),
    calcul(16, "Hyperbolic Tangent (tanh x)", Standard, INV_NOMBRE, Fonction("tanh"), |o| reel(o.a.tanh())),
    calcul(17, "Reciprocal (1/x)", Standard, INV_NOMBRE, Reciproque, reciproque),
    calcul(18, "Square Root (sqrt x)", Standard, INV_NOMBRE, Fonction("sqrt"), racine),
    calcul(19, "Gamma Function (Γ(x))", Standard, INV_NOMBRE, Fonction("Γ"), |o| reel(libm::tgamma(o.a))),
    calcul(20, "Error Function (erf(x))", Standard, INV_NOMBRE, Fonction("erf"), |o| reel(libm::erf(o.a))),
    // --- Spéciales ---
    calcul(21, "Bessel Func (J_n(x)) [Input: int n, double x]", Speciale, INV_BESSEL, Indice("J"), |o| reel(libm::jn(o.n, o.a))),
    calcul(CODE_LEGENDRE, "Legendre Poly (P_n(x)) [Input: int n, double x]", Speciale, INV_LEGENDRE, Indice("P"), legendre_op),
    calcul(23, "Complex Exp (e^ix)   [Input: double x]", Speciale, INV_EXP_COMPLEXE, ExpComplexe, exp_complexe),
    // --- Avancées (jamais calculées) ---
    avancee(24, "Derivative"),
    avancee(25, "Integral"),
    avancee(26, "Gradient/Divergence/Curl"),
    avancee(27, "Fourier Transform"),
    avancee(28, "Dirac Delta"),
];

/// Entrée du catalogue pour un code (None = choix invalide).
pub fn chercher(code: i32) -> Option<&'static Operation> {
    CATALOGUE.iter().find(|op| op.code == code)
}

/// Dispatcher : code + opérandes -> issue.
/// Les opérandes non déclarés par l’entrée sont ignorés.
pub fn traiter(code: i32, operandes: &Operandes) -> Issue {
    let Some(op) = chercher(code) else {
        return Issue::ChoixInvalide;
    };

    match op.forme {
        Forme::Sortie => Issue::Sortie,
        Forme::NonSupportee => Issue::NonSupporte,
        Forme::Calcul { notation, eval, .. } => match eval(operandes) {
            Ok(valeur) => Issue::Resultat {
                notation,
                operandes: *operandes,
                valeur,
            },
            Err(e) => Issue::Erreur(e),
        },
    }
}
