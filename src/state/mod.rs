pub mod store;
pub mod visibility;

pub use store::{FormState, RenderCallback};
pub use visibility::PasswordVisibility;
