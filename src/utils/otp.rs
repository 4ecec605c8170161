use super::validation::OTP_LENGTH;

/// Six single-digit slots with one focused slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpCode {
    slots: [Option<char>; OTP_LENGTH],
    focus: usize,
}

impl OtpCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Option<char>; OTP_LENGTH] {
        &self.slots
    }

    /// Index of the focused slot.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn set_focus(&mut self, index: usize) {
        self.focus = index.min(OTP_LENGTH - 1);
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// The digits entered so far, in slot order, skipping gaps.
    pub fn code(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    /// Write a digit into the focused slot and advance.
    ///
    /// Returns false (and changes nothing) for anything but an ASCII digit.
    pub fn input(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() {
            return false;
        }
        self.slots[self.focus] = Some(c);
        if self.focus < OTP_LENGTH - 1 {
            self.focus += 1;
        }
        true
    }

    /// Clear the focused slot, or step back when it is already empty.
    pub fn backspace(&mut self) {
        if self.slots[self.focus].is_some() {
            self.slots[self.focus] = None;
        } else if self.focus > 0 {
            self.focus -= 1;
        }
    }

    /// Clear the focused slot without moving.
    pub fn delete(&mut self) {
        self.slots[self.focus] = None;
    }

    pub fn move_left(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.set_focus(self.focus + 1);
    }

    /// Fill slots from a pasted string.
    ///
    /// Only the first six characters are considered. A digit at position `i`
    /// lands in slot `i`; other characters leave their slot untouched. Focus
    /// moves to the slot after the pasted text.
    pub fn paste(&mut self, text: &str) {
        let head: Vec<char> = text.chars().take(OTP_LENGTH).collect();
        for (slot, c) in self.slots.iter_mut().zip(&head) {
            if c.is_ascii_digit() {
                *slot = Some(*c);
            }
        }
        self.set_focus(head.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> OtpCode {
        let mut otp = OtpCode::new();
        for c in s.chars() {
            otp.input(c);
        }
        otp
    }

    #[test]
    fn typing_advances_and_completes() {
        let otp = typed("123456");
        assert!(otp.is_complete());
        assert_eq!(otp.code(), "123456");
        assert_eq!(otp.focus(), 5);
    }

    #[test]
    fn non_digits_are_ignored() {
        let mut otp = typed("12");
        assert!(!otp.input('a'));
        assert!(!otp.input(' '));
        assert_eq!(otp.code(), "12");
        assert_eq!(otp.focus(), 2);
    }

    #[test]
    fn last_slot_is_overwritten() {
        let mut otp = typed("123456");
        otp.input('9');
        assert_eq!(otp.code(), "123459");
    }

    #[test]
    fn backspace_clears_then_moves_back() {
        let mut otp = typed("12");
        // focus sits on the empty third slot
        otp.backspace();
        assert_eq!(otp.focus(), 1);
        assert_eq!(otp.code(), "12");
        otp.backspace();
        assert_eq!(otp.code(), "1");
        assert_eq!(otp.focus(), 1);
    }

    #[test]
    fn backspace_at_first_empty_slot_stays() {
        let mut otp = OtpCode::new();
        otp.backspace();
        assert_eq!(otp.focus(), 0);
    }

    #[test]
    fn paste_takes_first_six_digits() {
        let mut otp = OtpCode::new();
        otp.paste("98765432");
        assert_eq!(otp.code(), "987654");
        assert!(otp.is_complete());
        assert_eq!(otp.focus(), 5);
    }

    #[test]
    fn paste_skips_non_digit_positions() {
        let mut otp = OtpCode::new();
        otp.paste("12-45");
        assert_eq!(otp.slots()[2], None);
        assert_eq!(otp.filled(), 4);
        assert!(!otp.is_complete());
        assert_eq!(otp.focus(), 5);
    }
}
