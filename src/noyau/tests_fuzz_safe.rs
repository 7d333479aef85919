//! Tests fuzz safe : robustesse + déterminisme du dispatcher.
//!
//! But : marteler le catalogue sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - codes hors table, opérandes extrêmes (0, -0, ±inf, NaN, très grands)
//! - budget temps global
//! - invariant clé : chaque requête produit exactement une issue,
//!   et une erreur produit un message d’une seule ligne

use std::time::{Duration, Instant};

use super::catalogue::{traiter, Issue, Operandes, Valeur};
use super::erreur::ErreurDomaine;
use super::format::message;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Générateurs ------------------------ */

fn gen_reel(rng: &mut Rng) -> f64 {
    match rng.pick(10) {
        0 => 0.0,
        1 => -0.0,
        2 => f64::INFINITY,
        3 => f64::NEG_INFINITY,
        4 => f64::NAN,
        5 => 1e300,
        6 => {
            // dans [-1, 1]
            f64::from(rng.pick(2001)) / 1000.0 - 1.0
        }
        _ => {
            let v = f64::from(rng.pick(20_000)) / 100.0;
            if rng.coin() {
                -v
            } else {
                v
            }
        }
    }
}

fn gen_code(rng: &mut Rng) -> i32 {
    // surtout dans la table, parfois dehors
    rng.pick(36) as i32 - 4
}

fn gen_ordre(rng: &mut Rng) -> i32 {
    rng.pick(80) as i32 - 20
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_issue_coherente_avec_le_code() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_resultat = 0usize;
    let mut vus_erreur = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let code = gen_code(&mut rng);
        let o = Operandes {
            a: gen_reel(&mut rng),
            b: gen_reel(&mut rng),
            n: gen_ordre(&mut rng),
        };

        let issue = traiter(code, &o);
        match issue {
            Issue::Resultat { .. } => {
                assert!((1..=23).contains(&code), "code={code} {o:?}");
                vus_resultat += 1;
            }
            Issue::Erreur(_) => {
                assert!(
                    matches!(code, 4 | 7 | 11 | 12 | 17 | 22),
                    "erreur inattendue: code={code} {o:?}"
                );
                vus_erreur += 1;
            }
            Issue::NonSupporte => assert!((24..=28).contains(&code)),
            Issue::Sortie => assert_eq!(code, 0),
            Issue::ChoixInvalide => assert!(!(0..=28).contains(&code)),
        }

        let texte = message(&issue, 6);
        assert!(!texte.is_empty());
        if let Issue::Erreur(_) = issue {
            assert!(texte.starts_with("Error: "));
            assert_eq!(texte.lines().count(), 1, "{texte:?}");
        }
    }

    // on veut un mix, sinon le fuzz ne “balaye” rien
    assert!(vus_resultat > 100, "trop peu de résultats: {vus_resultat}");
    assert!(vus_erreur > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        let (c1, a1, n1) = (gen_code(&mut r1), gen_reel(&mut r1), gen_ordre(&mut r1));
        let (c2, a2, n2) = (gen_code(&mut r2), gen_reel(&mut r2), gen_ordre(&mut r2));

        let o1 = Operandes { a: a1, b: a1, n: n1 };
        let o2 = Operandes { a: a2, b: a2, n: n2 };

        // comparaison textuelle : NaN != NaN en PartialEq
        assert_eq!(message(&traiter(c1, &o1), 6), message(&traiter(c2, &o2), 6));
    }
}

#[test]
fn fuzz_safe_legendre_domaine() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x1E6E_u64);

    for _ in 0..500 {
        budget(t0, max);

        let n = gen_ordre(&mut rng);
        let x = f64::from(rng.pick(2001)) / 1000.0 - 1.0;

        match traiter(22, &Operandes { a: x, b: 0.0, n }) {
            Issue::Erreur(e) => {
                assert!(n < 0, "n={n}");
                assert_eq!(e, ErreurDomaine::OrdreNegatif);
            }
            Issue::Resultat {
                valeur: Valeur::Reel(v),
                ..
            } => {
                assert!(n >= 0);
                assert!(v.abs() <= 1.0 + 1e-12, "P_{n}({x}) = {v}");
            }
            autre => panic!("issue inattendue pour P_{n}({x}): {autre:?}"),
        }
    }
}

#[test]
fn fuzz_safe_domaines_unite() {
    let mut rng = Rng::new(0xA5C05_u64);

    for _ in 0..500 {
        let x = gen_reel(&mut rng);
        for code in [11, 12] {
            let dedans = (-1.0..=1.0).contains(&x);
            match traiter(code, &Operandes { a: x, b: 0.0, n: 0 }) {
                Issue::Resultat { .. } => assert!(dedans, "code={code} x={x}"),
                Issue::Erreur(ErreurDomaine::HorsIntervalle { .. }) => {
                    assert!(!dedans, "code={code} x={x}")
                }
                autre => panic!("code={code} x={x}: {autre:?}"),
            }
        }
    }
}
