use crate::core::{FieldId, Form, FormEvent, FormKind};
use crate::error::{Error, Result};
use crate::screen::{FieldView, Navigation, ScreenEvent};
use crate::state::{FormState, PasswordVisibility};
use crate::validation::FormValidator;
use indexmap::IndexMap;
use std::rc::Rc;
use tracing::{debug, info};

/// One visit to a form screen: the form, its visibility flags and the
/// events produced since the host last drained them.
pub struct FormScreen<F> {
    state: FormState<F>,
    validator: Rc<FormValidator>,
    visibility: IndexMap<FieldId, PasswordVisibility>,
    events: Vec<FormEvent>,
}

impl<F: Form> FormScreen<F> {
    pub fn new(form: F, validator: Rc<FormValidator>, secret_fields: &[&str]) -> Result<Self> {
        if validator.kind() != form.kind() {
            return Err(Error::ValidatorMismatch {
                form: form.kind(),
                validator: validator.kind(),
            });
        }
        let visibility = secret_fields
            .iter()
            .map(|&id| (FieldId::from(id), PasswordVisibility::default()))
            .collect();
        Ok(Self {
            state: FormState::new(form),
            validator,
            visibility,
            events: Vec::new(),
        })
    }

    pub fn kind(&self) -> FormKind {
        self.state.form().kind()
    }

    pub fn form(&self) -> &F {
        self.state.form()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&F) + 'static) {
        self.state.subscribe(callback);
    }

    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.visibility.get(id).map(|flag| flag.is_visible())
    }

    pub fn take_events(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn handle(&mut self, event: ScreenEvent) -> Result<Navigation> {
        match event {
            ScreenEvent::Input { field, value } => {
                if self.state.form().field(&field).is_none() {
                    return Err(Error::UnknownField {
                        form: self.kind(),
                        field,
                    });
                }
                let events = self.state.update(|form| form.input(&field, value))?;
                self.events.extend(events);
                Ok(Navigation::Stay)
            }
            ScreenEvent::ToggleVisibility { field } => {
                let Some(flag) = self.visibility.get_mut(field.as_str()) else {
                    return Err(Error::NotMaskable { field });
                };
                let visible = flag.toggle();
                self.events.push(FormEvent::VisibilityToggled {
                    id: field.into(),
                    visible,
                });
                self.state.notify();
                Ok(Navigation::Stay)
            }
            ScreenEvent::Submit => Ok(self.submit()),
            ScreenEvent::Back => Ok(match self.kind() {
                FormKind::SignUp => Navigation::Back,
                FormKind::Login => Navigation::Stay,
            }),
            ScreenEvent::OpenSignUp => Ok(match self.kind() {
                FormKind::Login => Navigation::OpenSignUp,
                FormKind::SignUp => Navigation::Stay,
            }),
        }
    }

    fn submit(&mut self) -> Navigation {
        let report = self.validator.validate(self.state.form());
        let events = self.state.update(|form| form.apply(&report));
        self.events.extend(events);

        let valid = report.is_valid();
        self.events.push(FormEvent::Submitted { valid });

        if !valid {
            debug!(form = %self.kind(), error_count = report.len(), "submit rejected");
            return Navigation::Stay;
        }

        info!(form = %self.kind(), "submit accepted");
        match self.kind() {
            FormKind::Login => Navigation::LoginSucceeded,
            FormKind::SignUp => Navigation::SignUpSucceeded,
        }
    }

    pub fn view(&self) -> Vec<FieldView> {
        self.state
            .form()
            .fields()
            .into_iter()
            .map(|field| {
                let flag = self.visibility.get(field.id().as_str()).copied();
                let display_value = match flag {
                    Some(flag) => flag.display(field.value()).into_owned(),
                    None => field.value().to_string(),
                };
                FieldView {
                    id: field.id().clone(),
                    label: field.label().to_string(),
                    display_value,
                    masked: flag.map(|flag| !flag.is_visible()),
                    is_error: field.has_error(),
                    supporting_text: field.has_error().then(|| field.error().to_string()),
                }
            })
            .collect()
    }
}
