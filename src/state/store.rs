use crate::core::Form;

pub type RenderCallback<F> = Box<dyn FnMut(&F)>;

/// Holds one form for the lifetime of a screen visit and notifies
/// subscribers after every mutation.
pub struct FormState<F> {
    form: F,
    listeners: Vec<RenderCallback<F>>,
    revision: u64,
}

impl<F: Form> FormState<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            listeners: Vec::new(),
            revision: 0,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&F) + 'static) {
        self.listeners.push(Box::new(callback));
    }

    /// Runs `mutate` against the form, then notifies every listener once.
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut F) -> R) -> R {
        let out = mutate(&mut self.form);
        self.notify();
        out
    }

    /// Re-renders without touching the form, for UI-only flags.
    pub fn notify(&mut self) {
        self.revision += 1;
        for listener in &mut self.listeners {
            listener(&self.form);
        }
    }
}
