use std::borrow::Cow;

pub const MASK_CHAR: char = '•';

/// Show/hide flag for a secret field. Has no bearing on validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordVisibility {
    visible: bool,
}

impl PasswordVisibility {
    pub fn is_visible(self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn display<'a>(self, value: &'a str) -> Cow<'a, str> {
        if self.visible {
            Cow::Borrowed(value)
        } else {
            Cow::Owned(value.chars().map(|_| MASK_CHAR).collect())
        }
    }
}
