use super::RosterError;
use crate::model::{Child, EventId};

/// Partition stable : les enfants non marqués gardent leur ordre et passent
/// devant, les enfants marqués gardent leur ordre et passent à la fin.
///
/// `stays_home` doit avoir exactement un marqueur par enfant.
pub fn rotate(waitlist: &[Child], stays_home: &[bool]) -> Result<Vec<Child>, RosterError> {
    if waitlist.len() != stays_home.len() {
        return Err(RosterError::SelectionMismatch {
            flags: stays_home.len(),
            children: waitlist.len(),
        });
    }
    let (home, rest): (Vec<(&Child, &bool)>, Vec<(&Child, &bool)>) = waitlist
        .iter()
        .zip(stays_home)
        .partition(|(_, flag)| **flag);
    Ok(rest
        .into_iter()
        .chain(home)
        .map(|(child, _)| child.clone())
        .collect())
}

/// Inverse de [`rotate`] : remet les enfants de l'événement en tête, dans
/// leur ordre d'origine.
///
/// Travaille sur une copie ; la liste fournie n'est jamais modifiée.
pub fn restore(
    waitlist: &[Child],
    event: EventId,
    children: &[Child],
) -> Result<Vec<Child>, RosterError> {
    let mut out = waitlist.to_vec();
    for child in children.iter().rev() {
        let idx = out
            .iter()
            .position(|c| c == child)
            .ok_or_else(|| RosterError::InconsistentState {
                event,
                child: child.clone(),
            })?;
        let moved = out.remove(idx);
        out.insert(0, moved);
    }
    Ok(out)
}
