//! Small presentational building blocks in the portal palette.

mod alert;
mod button;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use spinner::Spinner;
