//! One-time code step.
//!
//! The code is entered across six single-digit cells. Focus movement is
//! computed here from the action, the cell index and the cell values; the UI
//! only moves DOM focus to [`OtpCells::focus`].

use super::{
    countdown::{Countdown, RESEND_COOLDOWN_SECS},
    error::{RegistrationError, ServiceError},
    service::{CodeCheck, VerificationService},
    wizard::CodeVerified,
};
use tracing::info;

pub const OTP_LENGTH: usize = 6;

/// The only code the simulated backend accepts.
pub const ACCEPTED_CODE: &str = "123456";

const LAST_CELL: usize = OTP_LENGTH - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellAction {
    /// A digit was typed into the cell.
    Filled,
    /// Backspace pressed while the cell had focus.
    Backspace,
    /// `digits` consecutive digits were distributed from cell 0.
    Pasted { digits: usize },
}

/// Focus index after `action` happened at `index`.
#[must_use]
pub fn next_focus(action: CellAction, index: usize, cells: &[Option<char>; OTP_LENGTH]) -> usize {
    match action {
        CellAction::Filled if index < LAST_CELL => index + 1,
        CellAction::Backspace
            if index > 0 && cells.get(index).is_some_and(Option::is_none) =>
        {
            index - 1
        }
        CellAction::Pasted { digits } => digits.min(LAST_CELL),
        _ => index,
    }
}

fn all_digits(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_digit())
}

/// Six cells, each empty or one ASCII digit, plus the focused index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OtpCells {
    cells: [Option<char>; OTP_LENGTH],
    focus: usize,
}

impl OtpCells {
    #[must_use]
    pub const fn cells(&self) -> &[Option<char>; OTP_LENGTH] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// Records that the user focused `index` directly.
    pub fn focus_cell(&mut self, index: usize) {
        if index < OTP_LENGTH {
            self.focus = index;
        }
    }

    /// Applies the value a cell received. Non-digit input is ignored and
    /// `false` is returned; an empty value clears the cell. Only the first
    /// character is kept.
    pub fn input(&mut self, index: usize, raw: &str) -> bool {
        if !all_digits(raw) {
            return false;
        }
        let Some(slot) = self.cells.get_mut(index) else {
            return false;
        };

        let digit = raw.chars().next();
        *slot = digit;
        self.focus = if digit.is_some() {
            next_focus(CellAction::Filled, index, &self.cells)
        } else {
            index
        };
        true
    }

    /// Backspace on an empty cell moves focus to the previous one. Clearing a
    /// filled cell arrives through [`Self::input`].
    pub fn backspace(&mut self, index: usize) {
        if index < OTP_LENGTH {
            self.focus = next_focus(CellAction::Backspace, index, &self.cells);
        }
    }

    /// Distributes up to six pasted digits from cell 0. Anything that is not
    /// purely digits is ignored as a whole.
    pub fn paste(&mut self, text: &str) -> bool {
        if text.is_empty() || !all_digits(text) {
            return false;
        }

        let mut digits = 0;
        for (slot, digit) in self.cells.iter_mut().zip(text.chars()) {
            *slot = Some(digit);
            digits += 1;
        }
        self.focus = next_focus(CellAction::Pasted { digits }, 0, &self.cells);
        true
    }

    #[must_use]
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled() == OTP_LENGTH
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpForm {
    cells: OtpCells,
    error: Option<RegistrationError>,
    busy: bool,
    cooldown: Countdown,
}

impl Default for OtpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OtpForm {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_cooldown(RESEND_COOLDOWN_SECS)
    }

    #[must_use]
    pub const fn with_cooldown(seconds: u32) -> Self {
        Self {
            cells: OtpCells {
                cells: [None; OTP_LENGTH],
                focus: 0,
            },
            error: None,
            busy: false,
            cooldown: Countdown::new(seconds),
        }
    }

    #[must_use]
    pub const fn cells(&self) -> &OtpCells {
        &self.cells
    }

    #[must_use]
    pub const fn error(&self) -> Option<&RegistrationError> {
        self.error.as_ref()
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub const fn cooldown(&self) -> &Countdown {
        &self.cooldown
    }

    /// Typing clears any shown error. Returns whether the input was accepted.
    pub fn input(&mut self, index: usize, raw: &str) -> bool {
        let accepted = self.cells.input(index, raw);
        if accepted {
            self.error = None;
        }
        accepted
    }

    pub fn backspace(&mut self, index: usize) {
        self.cells.backspace(index);
    }

    pub fn paste(&mut self, text: &str) -> bool {
        self.cells.paste(text)
    }

    pub fn focus_cell(&mut self, index: usize) {
        self.cells.focus_cell(index);
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.cells.is_complete() && !self.busy
    }

    /// Advances the cooldown by one tick.
    pub const fn tick(&mut self) -> u32 {
        self.cooldown.tick()
    }

    #[must_use]
    pub const fn can_resend(&self) -> bool {
        self.cooldown.is_expired()
    }

    /// Clears every cell and the error and restarts the cooldown. No backend
    /// is contacted yet; the request is only logged.
    pub fn resend(&mut self) {
        self.cells.clear();
        self.error = None;
        self.cooldown.reset();
        info!("verification code resend requested");
    }

    /// Checks the code shape and enters the busy state. Returns the code to verify.
    ///
    /// # Errors
    /// [`RegistrationError::Busy`] while a check is in flight, or
    /// [`RegistrationError::IncompleteCode`] (also shown inline) with fewer than six digits.
    pub fn begin_verify(&mut self) -> Result<String, RegistrationError> {
        if self.busy {
            return Err(RegistrationError::Busy);
        }
        let code = self.cells.code();
        if code.len() != OTP_LENGTH {
            let err = RegistrationError::IncompleteCode {
                entered: code.len(),
            };
            self.error = Some(err.clone());
            return Err(err);
        }
        self.busy = true;
        Ok(code)
    }

    /// Leaves the busy state. A rejected code keeps the cells populated for correction.
    ///
    /// # Errors
    /// [`RegistrationError::CodeMismatch`] for a wrong code, or the service failure.
    pub fn finish_verify(
        &mut self,
        result: Result<CodeCheck, ServiceError>,
    ) -> Result<CodeVerified, RegistrationError> {
        self.busy = false;
        let err = match result {
            Ok(CodeCheck::Valid) => return Ok(CodeVerified::new()),
            Ok(CodeCheck::Invalid) => RegistrationError::CodeMismatch,
            Err(err) => RegistrationError::from(err),
        };
        self.error = Some(err.clone());
        Err(err)
    }

    /// Verifies the entered code for `email` with `service`.
    ///
    /// # Errors
    /// Any error from [`Self::begin_verify`] or [`Self::finish_verify`].
    pub async fn verify<S: VerificationService>(
        &mut self,
        service: &S,
        email: &str,
    ) -> Result<CodeVerified, RegistrationError> {
        let code = self.begin_verify()?;
        let result = service.verify_code(email, &code).await;
        self.finish_verify(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::service::{NoDelay, SimulatedService};

    fn cells_from(text: &str) -> OtpCells {
        let mut cells = OtpCells::default();
        assert!(cells.paste(text));
        cells
    }

    fn digits(cells: &OtpCells) -> Vec<String> {
        cells
            .cells()
            .iter()
            .map(|cell| cell.map(String::from).unwrap_or_default())
            .collect()
    }

    #[test]
    fn typing_a_digit_advances_focus() {
        let mut cells = OtpCells::default();
        for index in 0..LAST_CELL {
            assert!(cells.input(index, "7"));
            assert_eq!(cells.focus(), index + 1);
        }
        assert!(cells.input(LAST_CELL, "7"));
        assert_eq!(cells.focus(), LAST_CELL);
        assert_eq!(cells.code(), "777777");
    }

    #[test]
    fn non_digit_input_is_a_no_op() {
        let mut cells = OtpCells::default();
        assert!(cells.input(2, "4"));
        let before = cells;

        assert!(!cells.input(2, "a"));
        assert!(!cells.input(2, " "));
        assert!(!cells.input(2, "4x"));
        assert_eq!(cells, before);
    }

    #[test]
    fn only_the_first_character_is_kept() {
        let mut cells = OtpCells::default();
        assert!(cells.input(0, "98"));
        assert_eq!(cells.cell(0), Some('9'));
    }

    #[test]
    fn empty_input_clears_without_moving_focus() {
        let mut cells = cells_from("123");
        cells.focus_cell(1);
        assert!(cells.input(1, ""));
        assert_eq!(cells.cell(1), None);
        assert_eq!(cells.focus(), 1);
    }

    #[test]
    fn out_of_range_cells_are_ignored() {
        let mut cells = OtpCells::default();
        assert!(!cells.input(OTP_LENGTH, "1"));
        cells.focus_cell(OTP_LENGTH);
        assert_eq!(cells.focus(), 0);
    }

    #[test]
    fn backspace_on_empty_cell_moves_back() {
        let mut cells = OtpCells::default();
        for index in 1..OTP_LENGTH {
            cells.focus_cell(index);
            cells.backspace(index);
            assert_eq!(cells.focus(), index - 1);
        }

        cells.focus_cell(0);
        cells.backspace(0);
        assert_eq!(cells.focus(), 0);
    }

    #[test]
    fn backspace_on_filled_cell_keeps_focus() {
        let mut cells = cells_from("12");
        cells.focus_cell(1);
        cells.backspace(1);
        assert_eq!(cells.focus(), 1);
    }

    #[test]
    fn pasting_fewer_digits_fills_from_the_start() {
        let cells = cells_from("98765");
        assert_eq!(digits(&cells), ["9", "8", "7", "6", "5", ""]);
        assert_eq!(cells.focus(), 5);
    }

    #[test]
    fn pasting_more_digits_truncates_to_six() {
        let cells = cells_from("1234567");
        assert_eq!(digits(&cells), ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(cells.focus(), 5);
    }

    #[test]
    fn short_paste_leaves_later_cells_untouched() {
        let mut cells = cells_from("111111");
        assert!(cells.paste("22"));
        assert_eq!(cells.code(), "221111");
        assert_eq!(cells.focus(), 2);
    }

    #[test]
    fn non_numeric_paste_is_ignored_entirely() {
        let mut cells = cells_from("12");
        let before = cells;
        assert!(!cells.paste("12a456"));
        assert!(!cells.paste(""));
        assert!(!cells.paste("123456\n"));
        assert_eq!(cells, before);
    }

    #[test]
    fn next_focus_is_pure() {
        let empty = [None; OTP_LENGTH];
        assert_eq!(next_focus(CellAction::Filled, 0, &empty), 1);
        assert_eq!(next_focus(CellAction::Filled, 5, &empty), 5);
        assert_eq!(next_focus(CellAction::Backspace, 3, &empty), 2);
        assert_eq!(next_focus(CellAction::Pasted { digits: 6 }, 0, &empty), 5);
        assert_eq!(next_focus(CellAction::Pasted { digits: 2 }, 0, &empty), 2);
    }

    #[test]
    fn incomplete_code_is_rejected_before_verification() {
        let mut form = OtpForm::new();
        assert!(form.paste("12345"));
        assert!(!form.can_submit());
        assert_eq!(
            form.begin_verify(),
            Err(RegistrationError::IncompleteCode { entered: 5 })
        );
        assert!(!form.is_busy());
        assert!(form.error().is_some());
    }

    #[test]
    fn gap_in_cells_counts_as_incomplete() {
        let mut form = OtpForm::new();
        assert!(form.paste("123456"));
        assert!(form.input(2, ""));
        assert_eq!(
            form.begin_verify(),
            Err(RegistrationError::IncompleteCode { entered: 5 })
        );
    }

    #[test]
    fn typing_clears_the_error() {
        let mut form = OtpForm::new();
        assert!(form.begin_verify().is_err());
        assert!(form.error().is_some());

        assert!(!form.input(0, "x"));
        assert!(form.error().is_some());

        assert!(form.input(0, "1"));
        assert_eq!(form.error(), None);
    }

    #[tokio::test]
    async fn wrong_code_keeps_cells_for_correction() {
        let service = SimulatedService::new(NoDelay);
        let mut form = OtpForm::new();
        assert!(form.paste("654321"));

        assert_eq!(
            form.verify(&service, "ana@school.edu").await,
            Err(RegistrationError::CodeMismatch)
        );
        assert_eq!(form.error(), Some(&RegistrationError::CodeMismatch));
        assert_eq!(form.cells().code(), "654321");
        assert!(!form.is_busy());
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn accepted_code_produces_proof() {
        let service = SimulatedService::new(NoDelay);
        let mut form = OtpForm::new();
        assert!(form.paste(ACCEPTED_CODE));

        assert_eq!(
            form.verify(&service, "ana@school.edu").await,
            Ok(CodeVerified::new())
        );
        assert_eq!(form.error(), None);
    }

    #[test]
    fn busy_form_refuses_a_second_check() {
        let mut form = OtpForm::new();
        assert!(form.paste(ACCEPTED_CODE));
        assert!(form.begin_verify().is_ok());
        assert!(!form.can_submit());
        assert_eq!(form.begin_verify(), Err(RegistrationError::Busy));
    }

    #[test]
    fn resend_unlocks_exactly_when_the_cooldown_expires() {
        let mut form = OtpForm::new();
        for _ in 0..59 {
            form.tick();
            assert!(!form.can_resend());
        }
        form.tick();
        assert!(form.can_resend());
    }

    #[test]
    fn resend_resets_cells_error_and_cooldown() {
        let mut form = OtpForm::new();
        assert!(form.paste("111111"));
        assert!(form.finish_verify(Ok(CodeCheck::Invalid)).is_err());
        for _ in 0..25 {
            form.tick();
        }

        form.resend();

        assert_eq!(form.cells(), &OtpCells::default());
        assert_eq!(form.error(), None);
        assert_eq!(form.cooldown().remaining(), RESEND_COOLDOWN_SECS);
        assert!(!form.can_resend());
    }
}
