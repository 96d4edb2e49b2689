use crate::core::{SignUpForm, names};
use crate::error::Result;
use crate::screen::FormScreen;
use crate::validation::FormValidator;
use std::rc::Rc;

pub type SignUpScreen = FormScreen<SignUpForm>;

impl SignUpScreen {
    pub fn open(validator: Rc<FormValidator>) -> Result<Self> {
        Self::new(
            SignUpForm::new(),
            validator,
            &[names::PASSWORD, names::CONFIRM_PASSWORD],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SignUpScreen;
    use crate::config::ValidationConfig;
    use crate::core::{FormKind, names};
    use crate::screen::{Navigation, ScreenEvent};
    use crate::validation::FormValidator;
    use std::rc::Rc;

    fn screen() -> SignUpScreen {
        let validator = FormValidator::from_config(FormKind::SignUp, &ValidationConfig::default())
            .expect("default config compiles");
        SignUpScreen::open(Rc::new(validator)).expect("sign-up validator")
    }

    fn fill(screen: &mut SignUpScreen, values: [(&str, &str); 4]) {
        for (field, value) in values {
            screen
                .handle(ScreenEvent::input(field, value))
                .expect("sign-up field");
        }
    }

    #[test]
    fn mismatched_confirmation_blocks_submit() {
        let mut screen = screen();
        fill(
            &mut screen,
            [
                (names::FULL_NAME, ""),
                (names::EMAIL, "x@y.com"),
                (names::PASSWORD, "abcdef"),
                (names::CONFIRM_PASSWORD, "abcxyz"),
            ],
        );
        let nav = screen.handle(ScreenEvent::Submit).expect("submit");
        assert_eq!(nav, Navigation::Stay);

        let form = screen.form();
        assert_eq!(form.full_name.error(), "full name is required");
        assert_eq!(form.email.error(), "");
        assert_eq!(form.password.error(), "");
        assert_eq!(form.confirm_password.error(), "passwords do not match");
    }

    #[test]
    fn complete_form_succeeds() {
        let mut screen = screen();
        fill(
            &mut screen,
            [
                (names::FULL_NAME, "Ada Lovelace"),
                (names::EMAIL, "ada@example.org"),
                (names::PASSWORD, "engine42"),
                (names::CONFIRM_PASSWORD, "engine42"),
            ],
        );
        assert_eq!(
            screen.handle(ScreenEvent::Submit).expect("submit"),
            Navigation::SignUpSucceeded
        );
    }

    #[test]
    fn visibility_flags_are_independent() {
        let mut screen = screen();
        screen
            .handle(ScreenEvent::toggle(names::CONFIRM_PASSWORD))
            .expect("confirm toggles");
        assert_eq!(screen.is_visible(names::PASSWORD), Some(false));
        assert_eq!(screen.is_visible(names::CONFIRM_PASSWORD), Some(true));
        assert_eq!(screen.is_visible(names::FULL_NAME), None);
    }

    #[test]
    fn back_leaves_the_screen() {
        let mut screen = screen();
        assert_eq!(screen.handle(ScreenEvent::Back).expect("back"), Navigation::Back);
        assert_eq!(
            screen.handle(ScreenEvent::OpenSignUp).expect("ignored"),
            Navigation::Stay
        );
    }
}
