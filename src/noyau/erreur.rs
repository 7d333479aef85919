// src/noyau/erreur.rs

use thiserror::Error;

/// Violation de domaine : l’opérande sort du domaine de l’opération.
/// Aucun calcul n’est tenté ; la boucle reprend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurDomaine {
    #[error("Division by zero.")]
    DivisionParZero,

    #[error("Logarithm is undefined for non-positive numbers.")]
    LogarithmeNonPositif,

    /// asin / acos hors de [-1, 1]
    #[error("Domain for {fonction} is [-1, 1].")]
    HorsIntervalle { fonction: &'static str },

    #[error("Order n must be non-negative.")]
    OrdreNegatif,
}
