//! Core types: the qualified-name element tree and the closed value sets
//! macro parameters draw from.

mod color;
mod name;
mod node;
pub mod symbols;

pub use color::{ParseStatusColorError, StatusColor};
pub use name::{Ns, QName};
pub use node::{Attribute, Child, Content, Node};
