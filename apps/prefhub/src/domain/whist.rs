use crate::domain::state::{GameState, Username, WhistDecision};
use crate::domain::validation::validate_whist;
use crate::errors::domain::DomainError;

/// Record a defender's whist decision. Declarations are informational and
/// never change scoring.
pub fn declare_whist(
    state: &mut GameState,
    defender: &Username,
    decision: WhistDecision,
) -> Result<(), DomainError> {
    validate_whist(state, defender, decision)?;
    state.whists.insert(defender.clone(), decision);
    Ok(())
}
