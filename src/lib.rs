//! macrodoc - typed builders for wiki storage-format macro blocks
//!
//! Assembles Confluence-style storage-format documents bottom-up: build leaf
//! blocks and rich-text bodies first, then hand them to container macros.
//! Every builder is a pure function returning an immutable tree node, ready
//! to be embedded in a larger document.
//!
//! ```
//! use macrodoc::domain::{Content, Node, QName, StatusColor};
//! use macrodoc::export::to_storage;
//! use macrodoc::markup::{build_body, build_info, build_status};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let badge = build_status("Stable", StatusColor::Green, false);
//! let body = build_body([
//!     Node::with(QName::plain("p"), [Content::from("All checks passed.")]).into(),
//!     badge.into(),
//! ]);
//! let info = build_info(body)?;
//! let xml = to_storage(&info)?;
//! assert!(xml.starts_with("<ac:structured-macro ac:name=\"info\">"));
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod export;
pub mod markup;
