mod chat_view;
mod global_footer;
mod key_hints;
mod overview;
mod resource_table;
mod sidebar;
mod spinner;
mod text_input;
pub mod theme;
mod truncate;

pub use chat_view::{wrap_text, ChatView, WelcomeScreen};
pub use global_footer::{FooterContext, GlobalFooter};
pub use key_hints::{key_hint_spans, render_key_hints, KeyHint, KeyHintBarStyle};
pub use overview::Overview;
pub use resource_table::ResourceTable;
pub use sidebar::{Sidebar, SIDEBAR_WIDTH};
pub use spinner::Spinner;
pub use text_input::TextInputState;
pub use truncate::truncate_to_width;
