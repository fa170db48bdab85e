//! TUI Application State
//!
//! The app plays the parent wizard's role for the profile step: it owns the
//! draft, applies the merge intents the step emits, and turns navigation
//! actions into an outcome for the caller. In the full onboarding flow the
//! same intents would move between sibling steps instead of quitting.

use super::events::TuiEvent;
use super::profile_step::{ProfileSetupStep, StepAction};
use crate::profile::ProfileDraft;

/// How the profile step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Validation passed and the user advanced
    Completed,
    /// The user navigated back to the previous step
    Back,
    /// The user abandoned the flow
    Cancelled,
}

impl StepOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Back => "back",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Application state for the profile setup screen.
pub struct App {
    /// The externally-owned profile record (owned here, read by the step)
    pub draft: ProfileDraft,

    /// The profile step component
    pub step: ProfileSetupStep,

    /// Whether the event loop should exit
    pub should_quit: bool,

    /// Set when the step relays a navigation action
    pub outcome: Option<StepOutcome>,
}

impl App {
    /// Create the app with a fresh draft and a freshly mounted step.
    pub fn new() -> Self {
        Self::with_draft(ProfileDraft::default())
    }

    /// Create the app around a draft created earlier in the flow.
    pub fn with_draft(draft: ProfileDraft) -> Self {
        Self {
            draft,
            step: ProfileSetupStep::new(),
            should_quit: false,
            outcome: None,
        }
    }

    /// Feed one event through the step and apply whatever it asks for.
    pub fn handle_event(&mut self, event: TuiEvent) {
        let action = match event {
            TuiEvent::Key(key) => self.step.handle_key(key, &self.draft),
            TuiEvent::Paste(text) => self.step.handle_paste(&text, &self.draft),
            TuiEvent::Quit => StepAction::Cancel,
            TuiEvent::Resize(_, _) | TuiEvent::Tick => StepAction::None,
        };
        self.apply(action);
    }

    /// The single writer of the draft: merges patches, maps navigation
    /// actions to outcomes.
    fn apply(&mut self, action: StepAction) {
        match action {
            StepAction::None => {}
            StepAction::Edit(patch) => {
                self.draft.apply(patch);
            }
            StepAction::Next => {
                tracing::info!(username = %self.draft.username, "profile step completed");
                self.finish(StepOutcome::Completed);
            }
            StepAction::Back => {
                tracing::debug!("profile step: back");
                self.finish(StepOutcome::Back);
            }
            StepAction::Cancel => {
                tracing::debug!("profile step: cancelled");
                self.finish(StepOutcome::Cancelled);
            }
        }
    }

    fn finish(&mut self, outcome: StepOutcome) {
        self.outcome = Some(outcome);
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
