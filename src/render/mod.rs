pub mod html;
pub mod text;

pub use html::{render_edit_page, render_html_document};
pub use text::render_text_table;
