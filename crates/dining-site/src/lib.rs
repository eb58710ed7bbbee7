//! Dining site — content rendering and form submission for a restaurant brand page.

pub mod content;
pub mod form;
pub mod ids;
pub mod layout;
pub mod loader;
pub mod render;
pub mod submit;
pub mod transport;
pub mod types;
pub mod view;

pub use content::{ContentDocument, MenuItem, Stat, VideoItem};
pub use form::{Form, FormKind, FormPayload};
pub use layout::default_page;
pub use loader::ContentLoader;
pub use render::{apply_content, build_menu, build_videos};
pub use submit::{FormSubmitter, PendingSubmission, SubmissionOutcome};
pub use transport::{HttpTransport, Transport};
pub use types::*;
pub use view::{MemoryPage, Node, PageView, Tone};
