use crate::core::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    InputChanged {
        id: FieldId,
        value: String,
    },
    ErrorCleared {
        id: FieldId,
    },
    ErrorShown {
        id: FieldId,
        message: String,
    },
    VisibilityToggled {
        id: FieldId,
        visible: bool,
    },
    Submitted {
        valid: bool,
    },
}
