//! Page keyboard shortcuts.

use leptos::prelude::*;
use web_sys::KeyboardEvent;

use scroll::input::{Key, Modifiers, Shortcut};
use scroll::menu::MenuEvent;

use crate::error::BindError;
use crate::handlers::nav;
use crate::state::page::PageState;
use crate::util::dom;

pub fn install(page: RwSignal<PageState>) -> Result<(), BindError> {
    let document = dom::document()?;
    dom::listen(&document, "keydown", move |ev: KeyboardEvent| {
        let modifiers = Modifiers {
            shift: ev.shift_key(),
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
        };
        let Some(shortcut) = Shortcut::from_key(&Key::new(ev.key()), modifiers) else {
            return;
        };
        if shortcut.prevents_default() {
            ev.prevent_default();
        }
        match shortcut {
            Shortcut::Search => log::info!("search requested"),
            Shortcut::CloseMenu => nav::apply_menu(page, MenuEvent::Escape),
        }
    })
}
