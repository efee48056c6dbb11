use super::RosterError;
use crate::model::Child;
use std::collections::HashSet;

/// Valide une sélection manuelle et la convertit en marqueurs alignés sur la
/// liste d'attente.
pub(super) fn manual_flags(waitlist: &[Child], chosen: &[Child]) -> Result<Vec<bool>, RosterError> {
    if chosen.is_empty() {
        return Err(RosterError::EmptySelection);
    }
    let mut seen = HashSet::with_capacity(chosen.len());
    let mut flags = vec![false; waitlist.len()];
    for child in chosen {
        if !seen.insert(child) {
            return Err(RosterError::DuplicateChild(child.clone()));
        }
        let idx = waitlist
            .iter()
            .position(|c| c == child)
            .ok_or_else(|| RosterError::UnknownChild(child.clone()))?;
        flags[idx] = true;
    }
    Ok(flags)
}

pub(super) fn front_flags(len: usize, count: usize) -> Result<Vec<bool>, RosterError> {
    if count == 0 {
        return Err(RosterError::EmptySelection);
    }
    if count > len {
        return Err(RosterError::NotEnoughChildren {
            requested: count,
            available: len,
        });
    }
    Ok((0..len).map(|i| i < count).collect())
}

/// Enfants marqués, dans l'ordre de la liste d'attente.
pub(super) fn marked(waitlist: &[Child], flags: &[bool]) -> Vec<Child> {
    waitlist
        .iter()
        .zip(flags)
        .filter(|(_, flag)| **flag)
        .map(|(child, _)| child.clone())
        .collect()
}
