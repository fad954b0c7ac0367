use tuikit_core::Key;

/// Shown in front of the pending digits.
pub const PROMPT: &str = ">>> ";

/// Input for the navigation state machine after numeric collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    /// A complete number typed by the user (1-based element index).
    Number(usize),
}

/// Accumulates digit keys into a number.
///
/// Digits are buffered and one of the commit keys (the menu's invoke
/// bindings) turns them into a number. Any other key drops the buffer and
/// is passed through unchanged, so `Backspace` doubles as "cancel this
/// input".
#[derive(Debug, Clone, Default)]
pub struct NumberPrompt {
    digits: String,
}

impl NumberPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key. Returns `None` while a number is still being typed.
    ///
    /// A key in `commit` completes pending digits; with nothing pending it
    /// passes through like any other key.
    pub fn feed(&mut self, key: Key, commit: &[Key]) -> Option<Input> {
        if !self.digits.is_empty() && commit.contains(&key) {
            return Some(Input::Number(self.take()));
        }
        match key {
            Key::Digit(d) => {
                if let Some(ch) = char::from_digit(d.into(), 10) {
                    self.digits.push(ch);
                }
                None
            }
            other => {
                self.cancel();
                Some(Input::Key(other))
            }
        }
    }

    /// Drop any pending digits.
    pub fn cancel(&mut self) {
        if !self.digits.is_empty() {
            log::debug!("discarding pending input {:?}", self.digits);
            self.digits.clear();
        }
    }

    /// Digits typed so far.
    pub fn pending(&self) -> &str {
        &self.digits
    }

    /// The prompt line with the pending digits echoed.
    pub fn line(&self) -> String {
        format!("{PROMPT}{}", self.digits)
    }

    fn take(&mut self) -> usize {
        // Too many digits for a usize is out of range for any page anyway.
        let n = self.digits.parse().unwrap_or(usize::MAX);
        self.digits.clear();
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTER: &[Key] = &[Key::Enter];

    #[test]
    fn digits_then_enter() {
        let mut p = NumberPrompt::new();
        assert_eq!(p.feed(Key::Digit(1), ENTER), None);
        assert_eq!(p.feed(Key::Digit(2), ENTER), None);
        assert_eq!(p.line(), ">>> 12");
        assert_eq!(p.feed(Key::Enter, ENTER), Some(Input::Number(12)));
        assert_eq!(p.pending(), "");
    }

    #[test]
    fn bare_enter_passes_through() {
        let mut p = NumberPrompt::new();
        assert_eq!(p.feed(Key::Enter, ENTER), Some(Input::Key(Key::Enter)));
    }

    #[test]
    fn other_keys_cancel() {
        let mut p = NumberPrompt::new();
        p.feed(Key::Digit(4), ENTER);
        assert_eq!(p.feed(Key::Backspace, ENTER), Some(Input::Key(Key::Backspace)));
        assert_eq!(p.pending(), "");
        p.feed(Key::Digit(4), ENTER);
        assert_eq!(p.feed(Key::Right, ENTER), Some(Input::Key(Key::Right)));
        assert_eq!(p.feed(Key::Enter, ENTER), Some(Input::Key(Key::Enter)));
    }

    #[test]
    fn overflow_saturates() {
        let mut p = NumberPrompt::new();
        for _ in 0..40 {
            p.feed(Key::Digit(9), ENTER);
        }
        assert_eq!(p.feed(Key::Enter, ENTER), Some(Input::Number(usize::MAX)));
    }

    #[test]
    fn out_of_range_digit_values_are_ignored() {
        let mut p = NumberPrompt::new();
        p.feed(Key::Digit(42), ENTER);
        assert_eq!(p.pending(), "");
    }

    #[test]
    fn commits_on_any_bound_key() {
        let mut p = NumberPrompt::new();
        let commit = [Key::Enter, Key::Char(' ')];
        p.feed(Key::Digit(7), &commit);
        assert_eq!(p.feed(Key::Char(' '), &commit), Some(Input::Number(7)));
        p.feed(Key::Digit(2), &[Key::Char(' ')]);
        // Enter is not bound here, so it cancels.
        assert_eq!(
            p.feed(Key::Enter, &[Key::Char(' ')]),
            Some(Input::Key(Key::Enter))
        );
        assert_eq!(p.pending(), "");
    }
}
