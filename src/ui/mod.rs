// This module is only used when the `ui` feature is enabled.
slint::include_modules!();

pub mod handlers;
pub mod state;

pub use handlers::{
    apply_active_session, on_close_session, on_copy_output, on_exclusions_edited,
    on_generate_summary, on_load_session, on_new_session, on_save_session, on_select_folder,
    on_select_session, on_toggle_check, on_toggle_expand,
};
pub use state::AppState;
