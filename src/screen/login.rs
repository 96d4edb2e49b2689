use crate::core::{LoginForm, names};
use crate::error::Result;
use crate::screen::FormScreen;
use crate::validation::FormValidator;
use std::rc::Rc;

pub type LoginScreen = FormScreen<LoginForm>;

impl LoginScreen {
    pub fn open(validator: Rc<FormValidator>) -> Result<Self> {
        Self::new(LoginForm::new(), validator, &[names::PASSWORD])
    }
}
