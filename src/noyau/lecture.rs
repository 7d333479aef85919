// src/noyau/lecture.rs
//
// Lecture des opérandes (texte -> nombre).
// Un jeton illisible donne None : c’est l’appelant qui signale
// « Invalid input » et purge la ligne.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// Réel : tout ce que `f64::from_str` accepte (y compris 1e-3, inf, nan),
/// plus les fractions `p/q` (arrondies au f64 le plus proche).
pub fn lire_reel(s: &str) -> Option<f64> {
    let s = s.trim();
    if let Ok(v) = s.parse::<f64>() {
        return Some(v);
    }
    if !s.contains('/') {
        return None;
    }
    lire_rationnel(s)?.to_f64()
}

/// Entier signé (ordre n de Bessel / Legendre).
pub fn lire_entier(s: &str) -> Option<i32> {
    s.trim().parse::<i32>().ok()
}

/// Code de menu : tout entier est un choix. Hors i32, on sature ;
/// le code obtenu n’est dans aucune entrée du catalogue (choix invalide).
pub fn lire_code(s: &str) -> Option<i32> {
    if let Some(code) = lire_entier(s) {
        return Some(code);
    }
    let n = lire_entier_big(s)?;
    Some(if n < BigInt::zero() { i32::MIN } else { i32::MAX })
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Rationnel exact depuis une écriture décimale finie ou une fraction.
///
/// Accepte : `3`, `-0.5`, `+.25`, `2.`, `1/3`, `-7/16`.
/// Refuse (None) : exposants, inf/nan, dénominateur nul, texte.
pub fn lire_rationnel(s: &str) -> Option<BigRational> {
    let s = s.trim();

    if let Some((num, den)) = s.split_once('/') {
        let n = lire_entier_big(num)?;
        let d = lire_entier_big(den)?;
        if d.is_zero() {
            return None;
        }
        return Some(BigRational::new(n, d));
    }

    let (neg, corps) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (ent, frac) = corps.split_once('.').unwrap_or((corps, ""));
    if ent.is_empty() && frac.is_empty() {
        return None;
    }
    if !ent.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let chiffres = format!("{ent}{frac}");
    let mut n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    if neg {
        n = -n;
    }

    Some(BigRational::new(n, pow10(frac.len())))
}

fn lire_entier_big(s: &str) -> Option<BigInt> {
    let s = s.trim();
    let (neg, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    if corps.is_empty() || !corps.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n = BigInt::parse_bytes(corps.as_bytes(), 10)?;
    Some(if neg { -n } else { n })
}
