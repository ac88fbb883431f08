#[cfg(feature = "ui")]
mod ui;

#[cfg(feature = "ui")]
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "ui")]
use slint::ComponentHandle;

#[cfg(feature = "ui")]
use ui::{
    AppState, AppWindow, apply_active_session, on_close_session, on_copy_output,
    on_exclusions_edited, on_generate_summary, on_load_session, on_new_session, on_save_session,
    on_select_folder, on_select_session, on_toggle_check, on_toggle_expand,
};

#[cfg(feature = "ui")]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = AppWindow::new()?;
    app.set_app_version(env!("CARGO_PKG_VERSION").into());

    let state = Rc::new(RefCell::new(AppState::default()));
    {
        let mut s = state.borrow_mut();
        let idx = s.push_session();
        s.active = idx;
    }
    apply_active_session(&app, &state);

    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_select_folder(move || {
            if let Some(app) = app_weak.upgrade() {
                on_select_folder(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_exclusions_edited(move || {
            if let Some(app) = app_weak.upgrade() {
                on_exclusions_edited(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_toggle_expand(move |idx| {
            if let Some(app) = app_weak.upgrade() {
                on_toggle_expand(&app, &state, idx as usize);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_toggle_check(move |idx| {
            if let Some(app) = app_weak.upgrade() {
                on_toggle_check(&app, &state, idx as usize);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_generate_summary(move || {
            if let Some(app) = app_weak.upgrade() {
                on_generate_summary(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_copy_output(move || {
            if let Some(app) = app_weak.upgrade() {
                on_copy_output(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_save_session(move || {
            if let Some(app) = app_weak.upgrade() {
                on_save_session(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_load_session(move || {
            if let Some(app) = app_weak.upgrade() {
                on_load_session(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_new_session(move || {
            if let Some(app) = app_weak.upgrade() {
                on_new_session(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_close_session(move || {
            if let Some(app) = app_weak.upgrade() {
                on_close_session(&app, &state);
            }
        });
    }
    {
        let app_weak = app.as_weak();
        let state = Rc::clone(&state);
        app.on_select_session(move |idx| {
            if let Some(app) = app_weak.upgrade() {
                on_select_session(&app, &state, idx as usize);
            }
        });
    }

    app.run()?;
    Ok(())
}

#[cfg(not(feature = "ui"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    eprintln!(
        "Built without the `ui` feature; nothing to run. \
Enable it with `--features ui`, or just run tests with `--no-default-features`."
    );
    Ok(())
}
