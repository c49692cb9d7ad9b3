//! Checkout State Machine Service
//!
//! Validates checkout session transitions.

use crate::domain::checkout::value_objects::CheckoutState;
use crate::domain::shared::DomainError;

const ENTITY: &str = "CheckoutSession";

/// Checkout State Machine for validating transitions.
pub struct CheckoutStateMachine;

impl CheckoutStateMachine {
    /// Check if a state transition is valid.
    #[must_use]
    pub fn is_valid_transition(from: CheckoutState, to: CheckoutState) -> bool {
        use CheckoutState::{
            AwaitingDeliveryCheck, Confirmed, Editing, Failed, ReadyToSubmit, Submitting,
        };

        matches!(
            (from, to),
            // From Editing
            (Editing, Editing)
                | (Editing, AwaitingDeliveryCheck)
                // From AwaitingDeliveryCheck
                | (AwaitingDeliveryCheck, AwaitingDeliveryCheck)
                | (AwaitingDeliveryCheck, ReadyToSubmit)
                | (AwaitingDeliveryCheck, Editing)
                // From ReadyToSubmit
                | (ReadyToSubmit, Submitting)
                | (ReadyToSubmit, AwaitingDeliveryCheck)
                | (ReadyToSubmit, Editing)
                // From Submitting
                | (Submitting, Confirmed)
                | (Submitting, Failed)
                // From Failed
                | (Failed, ReadyToSubmit)
                | (Failed, AwaitingDeliveryCheck)
                | (Failed, Editing)
                // Reset
                | (Confirmed, Editing)
        )
    }

    /// Validate a state transition.
    ///
    /// # Errors
    ///
    /// Returns error if the transition is invalid.
    pub fn validate_transition(from: CheckoutState, to: CheckoutState) -> Result<(), DomainError> {
        if Self::is_valid_transition(from, to) {
            Ok(())
        } else {
            Err(DomainError::InvalidStateTransition {
                entity: ENTITY.to_string(),
                from: from.to_string(),
                to: to.to_string(),
                reason: Self::transition_error_reason(from, to),
            })
        }
    }

    /// Get a human-readable reason for an invalid transition.
    #[must_use]
    pub fn transition_error_reason(from: CheckoutState, to: CheckoutState) -> String {
        match from {
            CheckoutState::Confirmed => {
                format!("Order is already placed, reset the session before moving to {to}")
            }
            CheckoutState::Submitting => {
                format!("Order is being placed, cannot transition to {to}")
            }
            _ => {
                let allowed: Vec<&str> = Self::valid_next_states(from)
                    .iter()
                    .map(CheckoutState::as_str)
                    .collect();
                format!(
                    "Invalid transition from {from} to {to}, expected one of: {}",
                    allowed.join(", ")
                )
            }
        }
    }

    /// Get all valid next states from a given state.
    #[must_use]
    pub fn valid_next_states(from: CheckoutState) -> Vec<CheckoutState> {
        match from {
            CheckoutState::Editing => {
                vec![CheckoutState::Editing, CheckoutState::AwaitingDeliveryCheck]
            }
            CheckoutState::AwaitingDeliveryCheck => vec![
                CheckoutState::AwaitingDeliveryCheck,
                CheckoutState::ReadyToSubmit,
                CheckoutState::Editing,
            ],
            CheckoutState::ReadyToSubmit => vec![
                CheckoutState::Submitting,
                CheckoutState::AwaitingDeliveryCheck,
                CheckoutState::Editing,
            ],
            CheckoutState::Submitting => vec![CheckoutState::Confirmed, CheckoutState::Failed],
            CheckoutState::Failed => vec![
                CheckoutState::ReadyToSubmit,
                CheckoutState::AwaitingDeliveryCheck,
                CheckoutState::Editing,
            ],
            CheckoutState::Confirmed => vec![CheckoutState::Editing],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CheckoutState; 6] = [
        CheckoutState::Editing,
        CheckoutState::AwaitingDeliveryCheck,
        CheckoutState::ReadyToSubmit,
        CheckoutState::Submitting,
        CheckoutState::Confirmed,
        CheckoutState::Failed,
    ];

    #[test]
    fn happy_path_is_valid() {
        let path = [
            CheckoutState::Editing,
            CheckoutState::AwaitingDeliveryCheck,
            CheckoutState::ReadyToSubmit,
            CheckoutState::Submitting,
            CheckoutState::Confirmed,
            CheckoutState::Editing,
        ];
        for pair in path.windows(2) {
            assert!(
                CheckoutStateMachine::is_valid_transition(pair[0], pair[1]),
                "{} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn failure_returns_to_ready() {
        assert!(CheckoutStateMachine::is_valid_transition(
            CheckoutState::Submitting,
            CheckoutState::Failed
        ));
        assert!(CheckoutStateMachine::is_valid_transition(
            CheckoutState::Failed,
            CheckoutState::ReadyToSubmit
        ));
    }

    #[test]
    fn cannot_submit_without_ready() {
        assert!(!CheckoutStateMachine::is_valid_transition(
            CheckoutState::Editing,
            CheckoutState::Submitting
        ));
        assert!(!CheckoutStateMachine::is_valid_transition(
            CheckoutState::AwaitingDeliveryCheck,
            CheckoutState::Submitting
        ));
    }

    #[test]
    fn confirmed_only_resets() {
        assert_eq!(
            CheckoutStateMachine::valid_next_states(CheckoutState::Confirmed),
            vec![CheckoutState::Editing]
        );
        let err = CheckoutStateMachine::validate_transition(
            CheckoutState::Confirmed,
            CheckoutState::Submitting,
        )
        .unwrap_err();
        assert!(err.to_string().contains("already placed"));
    }

    #[test]
    fn reason_lists_allowed_states() {
        let reason = CheckoutStateMachine::transition_error_reason(
            CheckoutState::Editing,
            CheckoutState::Submitting,
        );
        assert_eq!(
            reason,
            "Invalid transition from EDITING to SUBMITTING, expected one of: EDITING, AWAITING_DELIVERY_CHECK"
        );
    }

    #[test]
    fn next_states_agree_with_transition_table() {
        for from in ALL {
            let next = CheckoutStateMachine::valid_next_states(from);
            for to in ALL {
                assert_eq!(
                    next.contains(&to),
                    CheckoutStateMachine::is_valid_transition(from, to),
                    "{from} -> {to}"
                );
            }
        }
    }
}
