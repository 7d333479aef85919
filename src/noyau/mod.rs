//! Noyau de la calculatrice (sans E/S)
//!
//! Organisation interne :
//! - legendre.rs  : P_n(x) par récurrence de Bonnet (flottant + exact sur Q)
//! - catalogue.rs : table code -> opération (invites, domaine, calcul) + dispatcher
//! - erreur.rs    : violations de domaine
//! - lecture.rs   : texte -> réel / entier / rationnel
//! - format.rs    : lignes de résultat, messages, menu

pub mod catalogue;
pub mod erreur;
pub mod format;
pub mod lecture;
pub mod legendre;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use catalogue::{chercher, traiter, Champ, Forme, Issue, Operandes, CATALOGUE};
