use super::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInField {
    #[default]
    Email,
    Password,
    RememberMe,
}

impl SignInField {
    pub fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::RememberMe,
            Self::RememberMe => Self::Email,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Email => Self::RememberMe,
            Self::Password => Self::Email,
            Self::RememberMe => Self::Password,
        }
    }
}

/// Sign-in form. Credentials are never checked; the form only has to be
/// filled in before it can be submitted.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: InputState,
    pub password: InputState,
    pub show_password: bool,
    pub remember_me: bool,
    pub focus: SignInField,
}

impl SignInForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Text field under focus, if the focus is on one
    pub fn focused_input(&mut self) -> Option<&mut InputState> {
        match self.focus {
            SignInField::Email => Some(&mut self.email),
            SignInField::Password => Some(&mut self.password),
            SignInField::RememberMe => None,
        }
    }

    pub fn type_char(&mut self, ch: char) {
        if let Some(input) = self.focused_input() {
            input.insert_char(ch);
        } else if ch == ' ' {
            self.remember_me = !self.remember_me;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn can_submit(&self) -> bool {
        is_email_like(self.email.value()) && !self.password.value().is_empty()
    }

    /// Password as drawn on screen
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.value().to_string()
        } else {
            "•".repeat(self.password.value().chars().count())
        }
    }
}

/// `local@domain` with both parts present and no whitespace
pub fn is_email_like(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut SignInForm, text: &str) {
        for ch in text.chars() {
            form.type_char(ch);
        }
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut form = SignInForm::new();
        assert!(!form.can_submit());

        fill(&mut form, "you@example.com");
        assert!(!form.can_submit());

        form.focus_next();
        fill(&mut form, "secret");
        assert!(form.can_submit());
    }

    #[test]
    fn test_password_is_masked_until_revealed() {
        let mut form = SignInForm::new();
        form.focus = SignInField::Password;
        fill(&mut form, "abc");

        assert_eq!(form.password_display(), "•••");
        form.toggle_show_password();
        assert_eq!(form.password_display(), "abc");
    }

    #[test]
    fn test_space_toggles_remember_me() {
        let mut form = SignInForm::new();
        form.focus_prev();
        assert_eq!(form.focus, SignInField::RememberMe);

        form.type_char(' ');
        assert!(form.remember_me);
        form.type_char('x');
        assert!(form.remember_me);
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email_like("a@b"));
        assert!(!is_email_like("ab"));
        assert!(!is_email_like("@b"));
        assert!(!is_email_like("a@"));
        assert!(!is_email_like("a b@c"));
        assert!(!is_email_like("a@b@c"));
    }
}
