//! Noyau — polynômes de Legendre P_n(x)
//!
//! Récurrence de Bonnet :
//!   P_0(x) = 1
//!   P_1(x) = x
//!   P_k(x) = ((2k - 1)·x·P_{k-1}(x) - (k - 1)·P_{k-2}(x)) / k      (k ≥ 2)
//!
//! Balayage avant : on ne garde que la paire (P_{k-1}, P_k).
//! O(n) en temps, O(1) en mémoire, aucune récursion.
//!
//! L’ordre est un `u32` : n ≥ 0 est garanti par le type.
//! Le rejet de n < 0 se fait en amont (catalogue, code 22).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

/// P_n(x) en flottant (balayage avant).
pub fn legendre(n: u32, x: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }

    // (P_{k-1}, P_k) à k = 1
    let mut prec = 1.0;
    let mut cour = x;

    for k in 2..=n {
        let kf = f64::from(k);
        let suiv = ((2.0 * kf - 1.0) * x * cour - (kf - 1.0) * prec) / kf;
        prec = cour;
        cour = suiv;
    }

    cour
}

/// Ordre maximal pour l’affichage exact : numérateur et dénominateur
/// grossissent avec n, le coût du balayage exact croît comme n³.
pub const ORDRE_EXACT_MAX: u32 = 500;

/// P_n(x) exact sur Q : même récurrence, sans arrondi.
///
/// Sert à l’affichage EXACT (ex: P_2(1/2) = -1/8) quand l’opérande
/// a été saisie sous forme décimale finie ou de fraction.
pub fn legendre_exact(n: u32, x: &BigRational) -> BigRational {
    if n == 0 {
        return BigRational::one();
    }

    let mut prec = BigRational::one();
    let mut cour = x.clone();

    for k in 2..=n {
        let k = BigInt::from(k);
        let deux_k_moins_un = BigRational::from_integer(&k * 2 - 1);
        let k_moins_un = BigRational::from_integer(&k - 1);

        let suiv = (deux_k_moins_un * x * &cour - k_moins_un * &prec)
            / BigRational::from_integer(k);
        prec = cour;
        cour = suiv;
    }

    cour
}
