//! Questionnaire state — phase tracking and selection accumulation.
//!
//! State is an immutable value; every user action goes through the pure
//! [`reduce`] function and yields the next state.  Actions that do not apply
//! to the current phase, or that fall outside the phase limits, return the
//! state unchanged.
//!
//! ```text
//! Foundation ─► BuildingBlocks ─► Colors ─► Details ─► Complete
//!   9 stones      5 blocks        1–5 picks  10 tokens
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{
    ActivationBand, BlockChoice, ColorSelection, Instinct, SelectionSet, StoneChoice,
    FOUNDATION_SETS,
};

/// Building blocks shown in the second phase.
pub const BUILDING_BLOCKS: usize = 5;
/// Most colors a user may pick.
pub const MAX_COLOR_SELECTIONS: usize = 5;
/// Detail tokens to place in the fourth phase.
pub const TOKEN_BUDGET: u64 = 10;

/// Questionnaire phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Foundation,
    BuildingBlocks,
    Colors,
    Details,
    Complete,
}

impl Phase {
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Foundation => Some(Phase::BuildingBlocks),
            Phase::BuildingBlocks => Some(Phase::Colors),
            Phase::Colors => Some(Phase::Details),
            Phase::Details => Some(Phase::Complete),
            Phase::Complete => None,
        }
    }

    pub fn previous(self) -> Option<Phase> {
        match self {
            Phase::Foundation => None,
            Phase::BuildingBlocks => Some(Phase::Foundation),
            Phase::Colors => Some(Phase::BuildingBlocks),
            Phase::Details => Some(Phase::Colors),
            Phase::Complete => Some(Phase::Details),
        }
    }
}

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    ChooseStone { set: usize, choice: StoneChoice },
    ChooseBlock { index: usize, choice: BlockChoice },
    /// Select a color, or deselect it if already selected.
    ToggleColor { color: String, category: ActivationBand },
    PlaceToken { instinct: Instinct },
    RemoveToken { instinct: Instinct },
    Advance,
    Back,
    Reset,
}

/// Snapshot of a questionnaire in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentState {
    phase: Phase,
    selections: SelectionSet,
}

impl AssessmentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Selections gathered so far, ready for [`crate::Engine::assess`].
    pub fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Whether the current phase has everything it needs to advance.
    pub fn phase_ready(&self) -> bool {
        let s = &self.selections;
        match self.phase {
            Phase::Foundation => s.answered_foundation() == FOUNDATION_SETS,
            Phase::BuildingBlocks => {
                (0..BUILDING_BLOCKS).all(|i| s.block(i).is_some())
            }
            Phase::Colors => {
                (1..=MAX_COLOR_SELECTIONS).contains(&s.color_selections.len())
            }
            Phase::Details => s.detail_selections.total() == TOKEN_BUDGET,
            Phase::Complete => false,
        }
    }

    /// Tokens still to place.
    pub fn tokens_remaining(&self) -> u64 {
        TOKEN_BUDGET.saturating_sub(self.selections.detail_selections.total())
    }

    /// Shorthand for [`reduce`].
    pub fn apply(&self, action: &Action) -> Self {
        reduce(self, action)
    }
}

/// Compute the state that follows `action`.
pub fn reduce(state: &AssessmentState, action: &Action) -> AssessmentState {
    let mut next = state.clone();
    let applied = match (state.phase, action) {
        (_, Action::Reset) => {
            next = AssessmentState::new();
            true
        }
        (phase, Action::Back) => match phase.previous() {
            Some(previous) => {
                next.phase = previous;
                true
            }
            None => false,
        },
        (phase, Action::Advance) => match phase.next() {
            Some(following) if state.phase_ready() => {
                next.phase = following;
                true
            }
            _ => false,
        },
        (Phase::Foundation, Action::ChooseStone { set, choice }) if *set < FOUNDATION_SETS => {
            next.selections.foundation_choices[*set] = Some(*choice);
            true
        }
        (Phase::BuildingBlocks, Action::ChooseBlock { index, choice })
            if *index < BUILDING_BLOCKS =>
        {
            let blocks = &mut next.selections.building_block_choices;
            if blocks.len() <= *index {
                blocks.resize(*index + 1, None);
            }
            blocks[*index] = Some(*choice);
            true
        }
        (Phase::Colors, Action::ToggleColor { color, category }) => {
            let colors = &mut next.selections.color_selections;
            if let Some(pos) = colors.iter().position(|c| c.color.as_deref() == Some(color)) {
                colors.remove(pos);
                true
            } else if colors.len() < MAX_COLOR_SELECTIONS {
                colors.push(ColorSelection::with_color(color.clone(), *category));
                true
            } else {
                false
            }
        }
        (Phase::Details, Action::PlaceToken { instinct }) if state.tokens_remaining() > 0 => {
            next.selections.detail_selections.add(*instinct, 1);
            true
        }
        (Phase::Details, Action::RemoveToken { instinct })
            if state.selections.detail_selections.get(*instinct) > 0 =>
        {
            next.selections.detail_selections.remove_one(*instinct);
            true
        }
        _ => false,
    };

    if !applied {
        log::debug!("Ignored {:?} in phase {:?}", action, state.phase);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    fn run(state: AssessmentState, actions: &[Action]) -> AssessmentState {
        actions.iter().fold(state, |s, a| reduce(&s, a))
    }

    fn complete_foundation() -> Vec<Action> {
        [0, 0, 0, 1, 0, 0, 1, 0, 1]
            .iter()
            .enumerate()
            .map(|(set, c)| Action::ChooseStone {
                set,
                choice: StoneChoice::from_index(*c).unwrap(),
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = AssessmentState::new();
        assert_eq!(state.phase(), Phase::Foundation);
        assert!(!state.phase_ready());
        assert_eq!(state.tokens_remaining(), TOKEN_BUDGET);
    }

    #[test]
    fn test_reduce_is_pure() {
        let state = AssessmentState::new();
        let action = Action::ChooseStone {
            set: 0,
            choice: StoneChoice::Second,
        };
        let next = reduce(&state, &action);
        assert_eq!(state, AssessmentState::new());
        assert_eq!(next.selections().foundation_choices[0], Some(StoneChoice::Second));
        assert_eq!(reduce(&state, &action), next);
    }

    #[test]
    fn test_advance_requires_complete_phase() {
        let partial = run(
            AssessmentState::new(),
            &[
                Action::ChooseStone {
                    set: 0,
                    choice: StoneChoice::First,
                },
                Action::Advance,
            ],
        );
        assert_eq!(partial.phase(), Phase::Foundation);

        let mut actions = complete_foundation();
        actions.push(Action::Advance);
        let state = run(AssessmentState::new(), &actions);
        assert_eq!(state.phase(), Phase::BuildingBlocks);
    }

    #[test]
    fn test_actions_for_other_phases_ignored() {
        let state = AssessmentState::new();
        let next = run(
            state.clone(),
            &[
                Action::ChooseBlock {
                    index: 0,
                    choice: BlockChoice::Left,
                },
                Action::PlaceToken {
                    instinct: Instinct::Social,
                },
                Action::ChooseStone {
                    set: 9,
                    choice: StoneChoice::First,
                },
                Action::Back,
            ],
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_block_index_out_of_range_ignored() {
        let state = AssessmentState {
            phase: Phase::BuildingBlocks,
            selections: SelectionSet::default(),
        };
        let next = state.apply(&Action::ChooseBlock {
            index: BUILDING_BLOCKS,
            choice: BlockChoice::Left,
        });
        assert_eq!(next, state);

        let last = state.apply(&Action::ChooseBlock {
            index: BUILDING_BLOCKS - 1,
            choice: BlockChoice::Right,
        });
        assert_eq!(last.selections().building_block_choices.len(), BUILDING_BLOCKS);
        assert_eq!(last.selections().block(BUILDING_BLOCKS - 1), Some(BlockChoice::Right));
        assert_eq!(last.selections().answered_blocks(), 1);
    }

    #[test]
    fn test_color_toggle_and_limit() {
        let mut state = AssessmentState {
            phase: Phase::Colors,
            selections: SelectionSet::default(),
        };
        for i in 0..7 {
            state = state.apply(&Action::ToggleColor {
                color: format!("c{}", i),
                category: ActivationBand::Average,
            });
        }
        assert_eq!(state.selections().color_selections.len(), MAX_COLOR_SELECTIONS);

        state = state.apply(&Action::ToggleColor {
            color: "c2".into(),
            category: ActivationBand::Average,
        });
        assert_eq!(state.selections().color_selections.len(), MAX_COLOR_SELECTIONS - 1);
        assert!(state.phase_ready());
    }

    #[test]
    fn test_token_budget() {
        let mut state = AssessmentState {
            phase: Phase::Details,
            selections: SelectionSet::default(),
        };
        for _ in 0..12 {
            state = state.apply(&Action::PlaceToken {
                instinct: Instinct::SelfPreservation,
            });
        }
        assert_eq!(state.selections().detail_selections.sp, 10);
        assert_eq!(state.tokens_remaining(), 0);
        assert!(state.phase_ready());

        state = state.apply(&Action::RemoveToken {
            instinct: Instinct::OneToOne,
        });
        assert_eq!(state.selections().detail_selections.total(), 10);
        state = state.apply(&Action::RemoveToken {
            instinct: Instinct::SelfPreservation,
        });
        assert!(!state.phase_ready());
    }

    #[test]
    fn test_full_walkthrough_feeds_engine() {
        let mut actions = complete_foundation();
        actions.push(Action::Advance);
        for index in 0..BUILDING_BLOCKS {
            actions.push(Action::ChooseBlock {
                index,
                choice: BlockChoice::Left,
            });
        }
        actions.push(Action::Advance);
        actions.push(Action::ToggleColor {
            color: "gold".into(),
            category: ActivationBand::Healthy,
        });
        actions.push(Action::ToggleColor {
            color: "sage".into(),
            category: ActivationBand::Average,
        });
        actions.push(Action::Advance);
        for (instinct, n) in [
            (Instinct::SelfPreservation, 6),
            (Instinct::Social, 2),
            (Instinct::OneToOne, 2),
        ] {
            for _ in 0..n {
                actions.push(Action::PlaceToken { instinct });
            }
        }
        actions.push(Action::Advance);

        let state = run(AssessmentState::new(), &actions);
        assert!(state.is_complete());

        let report = Engine::builtin().assess(state.selections());
        assert_eq!(report.headline(), "1w9 sp/so/sx");

        let back = state.apply(&Action::Back);
        assert_eq!(back.phase(), Phase::Details);
        assert_eq!(back.apply(&Action::Reset), AssessmentState::new());
    }

    #[test]
    fn test_action_wire_format() {
        let action: Action =
            serde_json::from_str(r#"{"type":"choose_block","index":2,"choice":"right"}"#).unwrap();
        assert_eq!(
            action,
            Action::ChooseBlock {
                index: 2,
                choice: BlockChoice::Right,
            }
        );
        let advance: Action = serde_json::from_str(r#"{"type":"advance"}"#).unwrap();
        assert_eq!(advance, Action::Advance);
    }
}
