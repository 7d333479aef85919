//! Tests scientifiques (campagne) : invariants de Legendre + cohérence du dispatcher.
//!
//! But : balayer large sans faire chauffer la machine.
//! - budget temps global
//! - ordres bornés pour la forme exacte (les rationnels grossissent vite)
//! - tolérances relatives pour x hors de [-1, 1] (P_n croît comme x^n)

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::catalogue::{traiter, Issue, Operandes, Valeur};
use super::erreur::ErreurDomaine;
use super::legendre::{legendre, legendre_exact};

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn grille() -> impl Iterator<Item = f64> {
    (0..=40).map(|i| (-1.0 + f64::from(i) * 0.05).clamp(-1.0, 1.0))
}

fn assert_rel(a: f64, b: f64, rel: f64, ctx: &str) {
    let echelle = 1.0_f64.max(a.abs()).max(b.abs());
    assert!(
        (a - b).abs() <= rel * echelle,
        "{ctx}: {a} vs {b} (écart {})",
        (a - b).abs()
    );
}

fn legendre_via_dispatcher(n: i32, x: f64) -> f64 {
    match traiter(22, &Operandes { a: x, b: 0.0, n }) {
        Issue::Resultat {
            valeur: Valeur::Reel(v),
            ..
        } => v,
        autre => panic!("P_{n}({x}) : attendu un réel, obtenu {autre:?}"),
    }
}

/* ------------------------ Invariants sur [-1, 1] ------------------------ */

#[test]
fn sci_borne_par_un_sur_l_intervalle() {
    // |P_n(x)| <= 1 pour x dans [-1, 1]
    for n in 0..120 {
        for x in grille() {
            let p = legendre(n, x);
            assert!(p.abs() <= 1.0 + 1e-12, "|P_{n}({x})| = {}", p.abs());
        }
    }
}

#[test]
fn sci_parite_et_bords() {
    for n in 0..120u32 {
        let signe = if n % 2 == 0 { 1.0 } else { -1.0 };
        assert_rel(legendre(n, 1.0), 1.0, 1e-12, "P_n(1)");
        assert_rel(legendre(n, -1.0), signe, 1e-12, "P_n(-1)");
        for x in grille() {
            assert_rel(legendre(n, -x), signe * legendre(n, x), 1e-12, "parité");
        }
    }
}

#[test]
fn sci_zero_des_ordres_impairs() {
    // P_{2k+1}(0) = 0 exactement (chaque étape multiplie par x = 0)
    for k in 0..60 {
        assert_eq!(legendre(2 * k + 1, 0.0), 0.0);
    }
}

#[test]
fn sci_recurrence_hors_intervalle() {
    // l’invariant tient aussi pour |x| > 1 (tolérance relative)
    for n in 2..30u32 {
        for &x in &[-3.0, -1.5, 1.25, 2.0, 4.0] {
            let nf = f64::from(n);
            let gauche = nf * legendre(n, x);
            let droite =
                (2.0 * nf - 1.0) * x * legendre(n - 1, x) - (nf - 1.0) * legendre(n - 2, x);
            assert_rel(gauche, droite, 1e-12, "récurrence");
        }
    }
}

/* ------------------------ Exact vs flottant ------------------------ */

#[test]
fn sci_exact_formes_fermees() {
    // P_2 = (3x² - 1)/2 ; P_3 = (5x³ - 3x)/2 ; P_4 = (35x⁴ - 30x² + 3)/8
    let un = BigRational::one();
    for p in -6..=6i64 {
        let x = BigRational::new(BigInt::from(p), BigInt::from(3));
        let x2 = &x * &x;
        let x3 = &x2 * &x;
        let x4 = &x2 * &x2;

        let deux = BigRational::from_integer(BigInt::from(2));
        let p2 = (BigRational::from_integer(BigInt::from(3)) * &x2 - &un) / &deux;
        let p3 = (BigRational::from_integer(BigInt::from(5)) * &x3
            - BigRational::from_integer(BigInt::from(3)) * &x)
            / &deux;
        let p4 = (BigRational::from_integer(BigInt::from(35)) * &x4
            - BigRational::from_integer(BigInt::from(30)) * &x2
            + BigRational::from_integer(BigInt::from(3)))
            / BigRational::from_integer(BigInt::from(8));

        assert_eq!(legendre_exact(2, &x), p2, "x={x}");
        assert_eq!(legendre_exact(3, &x), p3, "x={x}");
        assert_eq!(legendre_exact(4, &x), p4, "x={x}");
    }
}

#[test]
fn sci_exact_parite() {
    for n in 0..25u32 {
        for p in 0..=8i64 {
            let x = BigRational::new(BigInt::from(p), BigInt::from(8));
            let plus = legendre_exact(n, &x);
            let moins = legendre_exact(n, &-x.clone());
            if n % 2 == 0 {
                assert_eq!(moins, plus);
            } else {
                assert_eq!(moins, -plus);
            }
        }
    }
}

#[test]
fn sci_exact_impair_en_zero() {
    for n in (1..40u32).step_by(2) {
        assert!(legendre_exact(n, &BigRational::zero()).is_zero());
    }
    // P_2k(0) = (-1)^k (2k)! / (4^k (k!)²) : signe alterné
    for k in 0..15u32 {
        let v = legendre_exact(2 * k, &BigRational::zero());
        assert_eq!(v.is_negative(), k % 2 == 1, "k={k}");
    }
}

/* ------------------------ Dispatcher ------------------------ */

#[test]
fn sci_dispatcher_egal_evaluateur() {
    for n in 0..50 {
        for x in grille() {
            assert_eq!(
                legendre_via_dispatcher(n, x).to_bits(),
                legendre(n as u32, x).to_bits()
            );
        }
    }
}

#[test]
fn sci_dispatcher_ordres_negatifs() {
    for n in -50..0 {
        assert_eq!(
            traiter(22, &Operandes { a: 0.5, b: 0.0, n }),
            Issue::Erreur(ErreurDomaine::OrdreNegatif)
        );
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_grand_ordre_lineaire() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // forme récursive naïve : impraticable ici ; balayage avant : linéaire
    let p = legendre(200_000, 0.3);
    budget(t0, max);
    assert!(p.is_finite());
    assert!(p.abs() <= 1.0);

    assert_rel(legendre(200_000, 1.0), 1.0, 1e-9, "P_n(1) grand n");
}

#[test]
fn sci_stress_exact_safe() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let x = BigRational::new(BigInt::from(1), BigInt::from(2));
    let v = legendre_exact(120, &x);
    budget(t0, max);

    // reste réduit et borné par 1 sur [-1, 1]
    assert!(!v.denom().is_zero());
    assert!(v.abs() <= BigRational::one());
}
