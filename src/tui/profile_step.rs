//! Profile Setup Step
//!
//! The profile step of the onboarding flow: avatar selection, name,
//! username, email and bio. The step never owns the draft it edits; it
//! reads a snapshot on every event and emits [`StepAction`] intents for the
//! host to apply. Validation runs only on submit, and navigation backward
//! or out is always allowed without validating.

use crossterm::event::{KeyCode, KeyEvent};

use super::events::keys;
use crate::profile::validate::{ValidationErrors, validate};
use crate::profile::{DraftPatch, ProfileDraft};

/// The four selectable preset avatars. Custom upload is intentionally
/// unsupported; the upload slot only opens an informational notice.
pub const AVATAR_PRESETS: [&str; 4] = [
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
    "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
    "https://images.unsplash.com/photo-1570295999919-56ceb5ecca61?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
];

/// Index of the upload slot at the end of the avatar row.
pub const UPLOAD_SLOT: usize = AVATAR_PRESETS.len();

/// Which form element has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Avatar,
    Name,
    Username,
    Email,
    Bio,
    Continue,
}

impl ProfileField {
    fn next(self) -> Self {
        match self {
            Self::Avatar => Self::Name,
            Self::Name => Self::Username,
            Self::Username => Self::Email,
            Self::Email => Self::Bio,
            Self::Bio => Self::Continue,
            Self::Continue => Self::Continue,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Avatar => Self::Avatar,
            Self::Name => Self::Avatar,
            Self::Username => Self::Name,
            Self::Email => Self::Username,
            Self::Bio => Self::Email,
            Self::Continue => Self::Bio,
        }
    }
}

/// What the host should do after the step handled an event.
///
/// `Edit` asks the host to merge a patch into the draft; the navigation
/// variants relay to the parent wizard controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Nothing special
    None,
    /// Merge this patch into the externally-owned draft
    Edit(DraftPatch),
    /// Validation passed, advance to the next step
    Next,
    /// Go back to the previous step (never validated)
    Back,
    /// Abandon the flow (never validated)
    Cancel,
}

/// State of the profile setup step.
///
/// Everything here is transient and reset on remount; the profile data
/// itself lives in the host-owned [`ProfileDraft`].
pub struct ProfileSetupStep {
    /// Focused form element
    pub focus: ProfileField,
    /// Highlight position on the avatar row (0..=3 presets, 4 = upload)
    pub avatar_cursor: usize,
    /// Inline errors from the last submit attempt
    pub errors: ValidationErrors,
    /// Whether the "upload unavailable" notice is open
    pub upload_notice: bool,
}

impl Default for ProfileSetupStep {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileSetupStep {
    /// Create a freshly mounted step: no errors, notice closed.
    pub fn new() -> Self {
        Self {
            focus: ProfileField::Avatar,
            avatar_cursor: 0,
            errors: ValidationErrors::default(),
            upload_notice: false,
        }
    }

    /// Step heading
    pub fn title(&self) -> &'static str {
        "Create Your Profile"
    }

    /// Step subheading
    pub fn subtitle(&self) -> &'static str {
        "Tell us a bit about yourself so others can get to know you better."
    }

    /// Handle a key event against the current draft snapshot.
    pub fn handle_key(&mut self, event: KeyEvent, draft: &ProfileDraft) -> StepAction {
        // Ctrl+C abandons the flow from anywhere, without validating
        if keys::is_quit(&event) {
            return StepAction::Cancel;
        }

        // The upload notice is modal: it swallows everything except close
        if self.upload_notice {
            if matches!(event.code, KeyCode::Enter | KeyCode::Esc) {
                self.upload_notice = false;
            }
            return StepAction::None;
        }

        // Esc relays Back, also without validating
        if keys::is_back(&event) {
            return StepAction::Back;
        }

        match self.focus {
            ProfileField::Avatar => self.handle_avatar_key(event, draft),
            ProfileField::Name | ProfileField::Username | ProfileField::Email
            | ProfileField::Bio => self.handle_text_key(event, draft),
            ProfileField::Continue => self.handle_continue_key(event, draft),
        }
    }

    /// Handle pasted text: inserted into the focused text field.
    pub fn handle_paste(&mut self, text: &str, draft: &ProfileDraft) -> StepAction {
        if self.upload_notice {
            return StepAction::None;
        }
        match self.focus {
            ProfileField::Name | ProfileField::Username | ProfileField::Email => {
                // Single-line fields: strip line breaks from the paste
                let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                if cleaned.is_empty() {
                    return StepAction::None;
                }
                let mut value = self.text_value(draft).to_string();
                value.push_str(&cleaned);
                StepAction::Edit(self.text_patch(value))
            }
            ProfileField::Bio => {
                let cleaned: String = text.chars().filter(|c| *c != '\r').collect();
                if cleaned.is_empty() {
                    return StepAction::None;
                }
                let mut value = draft.bio.clone();
                value.push_str(&cleaned);
                StepAction::Edit(self.text_patch(value))
            }
            ProfileField::Avatar | ProfileField::Continue => StepAction::None,
        }
    }

    // --- Per-focus key handlers ---

    fn handle_avatar_key(&mut self, event: KeyEvent, _draft: &ProfileDraft) -> StepAction {
        match event.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.avatar_cursor = self.avatar_cursor.saturating_sub(1);
                StepAction::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.avatar_cursor = (self.avatar_cursor + 1).min(UPLOAD_SLOT);
                StepAction::None
            }
            KeyCode::Char(' ') => self.activate_avatar_slot(),
            KeyCode::Enter => {
                let action = self.activate_avatar_slot();
                // Selecting a preset confirms the row and moves on; the
                // upload slot keeps focus so the notice stays in context
                if self.avatar_cursor < UPLOAD_SLOT {
                    self.focus = ProfileField::Name;
                }
                action
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                StepAction::None
            }
            _ => StepAction::None,
        }
    }

    /// Select the highlighted preset, or open the upload notice.
    /// Re-selecting the current preset just emits the same merge again.
    fn activate_avatar_slot(&mut self) -> StepAction {
        if self.avatar_cursor == UPLOAD_SLOT {
            self.upload_notice = true;
            return StepAction::None;
        }
        StepAction::Edit(DraftPatch {
            avatar: Some(AVATAR_PRESETS[self.avatar_cursor].to_string()),
            ..Default::default()
        })
    }

    fn handle_text_key(&mut self, event: KeyEvent, draft: &ProfileDraft) -> StepAction {
        match event.code {
            KeyCode::Char(c) => {
                let mut value = self.text_value(draft).to_string();
                value.push(c);
                StepAction::Edit(self.text_patch(value))
            }
            KeyCode::Backspace => {
                let mut value = self.text_value(draft).to_string();
                if value.pop().is_none() {
                    return StepAction::None;
                }
                StepAction::Edit(self.text_patch(value))
            }
            KeyCode::Tab | KeyCode::Enter => {
                self.focus = self.focus.next();
                StepAction::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                StepAction::None
            }
            _ => StepAction::None,
        }
    }

    fn handle_continue_key(&mut self, event: KeyEvent, draft: &ProfileDraft) -> StepAction {
        match event.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(draft),
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                StepAction::None
            }
            _ => StepAction::None,
        }
    }

    /// Validate and either advance or surface inline errors.
    /// The whole error record is replaced on every attempt.
    fn submit(&mut self, draft: &ProfileDraft) -> StepAction {
        self.errors = validate(draft);
        if self.errors.is_clean() {
            StepAction::Next
        } else {
            StepAction::None
        }
    }

    /// Current value of the focused text field.
    fn text_value<'a>(&self, draft: &'a ProfileDraft) -> &'a str {
        match self.focus {
            ProfileField::Name => &draft.name,
            ProfileField::Username => &draft.username,
            ProfileField::Email => &draft.email,
            ProfileField::Bio => &draft.bio,
            ProfileField::Avatar | ProfileField::Continue => "",
        }
    }

    /// Patch carrying a new value for the focused text field.
    fn text_patch(&self, value: String) -> DraftPatch {
        let mut patch = DraftPatch::default();
        match self.focus {
            ProfileField::Name => patch.name = Some(value),
            ProfileField::Username => patch.username = Some(value),
            ProfileField::Email => patch.email = Some(value),
            ProfileField::Bio => patch.bio = Some(value),
            ProfileField::Avatar | ProfileField::Continue => {}
        }
        patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fresh_step_state() {
        let step = ProfileSetupStep::new();
        assert_eq!(step.focus, ProfileField::Avatar);
        assert_eq!(step.avatar_cursor, 0);
        assert!(step.errors.is_clean());
        assert!(!step.upload_notice);
    }

    #[test]
    fn test_typing_emits_edit_with_appended_char() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Name;
        let draft = ProfileDraft {
            name: "Ad".to_string(),
            ..Default::default()
        };

        let action = step.handle_key(key(KeyCode::Char('a')), &draft);
        let expected = DraftPatch {
            name: Some("Ada".to_string()),
            ..Default::default()
        };
        assert_eq!(action, StepAction::Edit(expected));
        // The snapshot itself is never touched by the component
        assert_eq!(draft.name, "Ad");
    }

    #[test]
    fn test_backspace_pops_one_char() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Email;
        let draft = ProfileDraft {
            email: "ab".to_string(),
            ..Default::default()
        };

        let action = step.handle_key(key(KeyCode::Backspace), &draft);
        let expected = DraftPatch {
            email: Some("a".to_string()),
            ..Default::default()
        };
        assert_eq!(action, StepAction::Edit(expected));
    }

    #[test]
    fn test_backspace_on_empty_field_is_noop() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Username;
        let draft = ProfileDraft::default();
        assert_eq!(step.handle_key(key(KeyCode::Backspace), &draft), StepAction::None);
    }

    #[test]
    fn test_empty_input_always_accepted_while_editing() {
        // Deleting down to empty emits the empty-string merge; the error
        // only surfaces at submit time
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Name;
        let draft = ProfileDraft {
            name: "A".to_string(),
            ..Default::default()
        };
        let action = step.handle_key(key(KeyCode::Backspace), &draft);
        let expected = DraftPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(action, StepAction::Edit(expected));
        assert!(step.errors.is_clean());
    }

    #[test]
    fn test_tab_walks_all_fields() {
        let mut step = ProfileSetupStep::new();
        let draft = ProfileDraft::default();

        let order = [
            ProfileField::Name,
            ProfileField::Username,
            ProfileField::Email,
            ProfileField::Bio,
            ProfileField::Continue,
            ProfileField::Continue, // clamped at the end
        ];
        for expected in order {
            step.handle_key(key(KeyCode::Tab), &draft);
            assert_eq!(step.focus, expected);
        }
    }

    #[test]
    fn test_backtab_walks_back_to_avatar() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Email;
        let draft = ProfileDraft::default();

        step.handle_key(key(KeyCode::BackTab), &draft);
        assert_eq!(step.focus, ProfileField::Username);
        step.handle_key(key(KeyCode::BackTab), &draft);
        assert_eq!(step.focus, ProfileField::Name);
        step.handle_key(key(KeyCode::BackTab), &draft);
        assert_eq!(step.focus, ProfileField::Avatar);
    }

    // --- avatar row ---

    #[test]
    fn test_avatar_cursor_moves_and_clamps() {
        let mut step = ProfileSetupStep::new();
        let draft = ProfileDraft::default();

        step.handle_key(key(KeyCode::Left), &draft);
        assert_eq!(step.avatar_cursor, 0);

        for _ in 0..10 {
            step.handle_key(key(KeyCode::Right), &draft);
        }
        assert_eq!(step.avatar_cursor, UPLOAD_SLOT);
    }

    #[test]
    fn test_space_selects_preset() {
        let mut step = ProfileSetupStep::new();
        let draft = ProfileDraft::default();

        step.handle_key(key(KeyCode::Right), &draft);
        let action = step.handle_key(key(KeyCode::Char(' ')), &draft);
        let expected = DraftPatch {
            avatar: Some(AVATAR_PRESETS[1].to_string()),
            ..Default::default()
        };
        assert_eq!(action, StepAction::Edit(expected));
        // Space keeps focus on the row
        assert_eq!(step.focus, ProfileField::Avatar);
    }

    #[test]
    fn test_enter_selects_preset_and_advances() {
        let mut step = ProfileSetupStep::new();
        let draft = ProfileDraft::default();

        let action = step.handle_key(key(KeyCode::Enter), &draft);
        let expected = DraftPatch {
            avatar: Some(AVATAR_PRESETS[0].to_string()),
            ..Default::default()
        };
        assert_eq!(action, StepAction::Edit(expected));
        assert_eq!(step.focus, ProfileField::Name);
    }

    #[test]
    fn test_reselecting_preset_is_idempotent() {
        let mut step = ProfileSetupStep::new();
        let mut draft = ProfileDraft::default();

        let first = step.handle_key(key(KeyCode::Char(' ')), &draft);
        if let StepAction::Edit(patch) = first {
            draft.apply(patch);
        }
        assert_eq!(draft.avatar, AVATAR_PRESETS[0]);

        // Second activation of the same slot: same merge, same draft
        let before = draft.clone();
        let second = step.handle_key(key(KeyCode::Char(' ')), &draft);
        let expected = DraftPatch {
            avatar: Some(AVATAR_PRESETS[0].to_string()),
            ..Default::default()
        };
        assert_eq!(second, StepAction::Edit(expected));
        if let StepAction::Edit(patch) = second {
            draft.apply(patch);
        }
        assert_eq!(draft, before);
    }

    // --- upload notice ---

    #[test]
    fn test_upload_slot_only_opens_notice() {
        let mut step = ProfileSetupStep::new();
        let draft = ProfileDraft::default();
        step.avatar_cursor = UPLOAD_SLOT;

        let action = step.handle_key(key(KeyCode::Enter), &draft);
        assert_eq!(action, StepAction::None);
        assert!(step.upload_notice);
        // No navigation, no draft mutation requested
        assert_eq!(step.focus, ProfileField::Avatar);
    }

    #[test]
    fn test_notice_swallows_keys_until_closed() {
        let mut step = ProfileSetupStep::new();
        let draft = ProfileDraft::default();
        step.upload_notice = true;

        assert_eq!(step.handle_key(key(KeyCode::Char('x')), &draft), StepAction::None);
        assert_eq!(step.handle_key(key(KeyCode::Tab), &draft), StepAction::None);
        assert!(step.upload_notice);

        assert_eq!(step.handle_key(key(KeyCode::Enter), &draft), StepAction::None);
        assert!(!step.upload_notice);
    }

    #[test]
    fn test_esc_closes_notice_without_going_back() {
        let mut step = ProfileSetupStep::new();
        let draft = ProfileDraft::default();
        step.upload_notice = true;

        let action = step.handle_key(key(KeyCode::Esc), &draft);
        assert_eq!(action, StepAction::None);
        assert!(!step.upload_notice);
    }

    // --- submit ---

    #[test]
    fn test_submit_valid_draft_advances() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Continue;
        let action = step.handle_key(key(KeyCode::Enter), &valid_draft());
        assert_eq!(action, StepAction::Next);
        assert!(step.errors.is_clean());
    }

    #[test]
    fn test_submit_empty_draft_surfaces_all_errors() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Continue;
        let action = step.handle_key(key(KeyCode::Enter), &ProfileDraft::default());
        assert_eq!(action, StepAction::None);
        assert_eq!(step.errors.name, "Name is required");
        assert_eq!(step.errors.username, "Username is required");
        assert_eq!(step.errors.email, "Email is required");
        // Still on the step, focus unchanged
        assert_eq!(step.focus, ProfileField::Continue);
    }

    #[test]
    fn test_submit_empty_name_blocks_even_with_valid_rest() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Continue;
        let draft = ProfileDraft {
            name: String::new(),
            ..valid_draft()
        };
        let action = step.handle_key(key(KeyCode::Enter), &draft);
        assert_eq!(action, StepAction::None);
        assert_eq!(step.errors.name, "Name is required");
        assert_eq!(step.errors.username, "");
        assert_eq!(step.errors.email, "");
    }

    #[test]
    fn test_submit_malformed_email_blocks() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Continue;
        let draft = ProfileDraft {
            email: "foo@bar".to_string(),
            ..valid_draft()
        };
        let action = step.handle_key(key(KeyCode::Enter), &draft);
        assert_eq!(action, StepAction::None);
        assert_eq!(step.errors.email, "Please enter a valid email address");
    }

    #[test]
    fn test_errors_persist_while_editing() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Continue;
        step.handle_key(key(KeyCode::Enter), &ProfileDraft::default());
        assert!(!step.errors.is_clean());

        // Editing does not live-clear; only the next submit recomputes
        step.focus = ProfileField::Name;
        step.handle_key(key(KeyCode::Char('A')), &ProfileDraft::default());
        assert_eq!(step.errors.name, "Name is required");
    }

    #[test]
    fn test_resubmit_after_fixing_clears_errors_and_advances() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Continue;
        step.handle_key(key(KeyCode::Enter), &ProfileDraft::default());
        assert!(!step.errors.is_clean());

        let action = step.handle_key(key(KeyCode::Enter), &valid_draft());
        assert_eq!(action, StepAction::Next);
        assert!(step.errors.is_clean());
    }

    // --- navigation relays ---

    #[test]
    fn test_esc_relays_back_without_validation() {
        let mut step = ProfileSetupStep::new();
        let action = step.handle_key(key(KeyCode::Esc), &ProfileDraft::default());
        assert_eq!(action, StepAction::Back);
        assert!(step.errors.is_clean());
    }

    #[test]
    fn test_ctrl_c_relays_cancel_without_validation() {
        let mut step = ProfileSetupStep::new();
        let action = step.handle_key(ctrl('c'), &ProfileDraft::default());
        assert_eq!(action, StepAction::Cancel);
        assert!(step.errors.is_clean());
    }

    #[test]
    fn test_ctrl_c_is_not_typed_into_fields() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Name;
        let action = step.handle_key(ctrl('c'), &ProfileDraft::default());
        assert_eq!(action, StepAction::Cancel);
    }

    // --- paste ---

    #[test]
    fn test_paste_appends_to_focused_field() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Email;
        let draft = ProfileDraft {
            email: "ada@".to_string(),
            ..Default::default()
        };
        let action = step.handle_paste("example.com", &draft);
        let expected = DraftPatch {
            email: Some("ada@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(action, StepAction::Edit(expected));
    }

    #[test]
    fn test_paste_strips_newlines_in_single_line_fields() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Username;
        let action = step.handle_paste("a\nda\r", &ProfileDraft::default());
        let expected = DraftPatch {
            username: Some("ada".to_string()),
            ..Default::default()
        };
        assert_eq!(action, StepAction::Edit(expected));
    }

    #[test]
    fn test_paste_keeps_newlines_in_bio() {
        let mut step = ProfileSetupStep::new();
        step.focus = ProfileField::Bio;
        let action = step.handle_paste("line one\nline two", &ProfileDraft::default());
        let expected = DraftPatch {
            bio: Some("line one\nline two".to_string()),
            ..Default::default()
        };
        assert_eq!(action, StepAction::Edit(expected));
    }

    #[test]
    fn test_paste_outside_text_fields_is_noop() {
        let mut step = ProfileSetupStep::new();
        assert_eq!(step.handle_paste("hello", &ProfileDraft::default()), StepAction::None);
        step.focus = ProfileField::Continue;
        assert_eq!(step.handle_paste("hello", &ProfileDraft::default()), StepAction::None);
    }
}
