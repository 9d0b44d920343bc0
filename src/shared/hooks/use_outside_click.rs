use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::shared::outside_click::WatchGuard;

/// Call `on_outside` for pointer interactions outside the element with id
/// `root_id`. The listener is attached after mount and removed on unmount.
///
/// Only the browser has a document to listen on; other targets never fire.
pub fn use_outside_click(root_id: String, events: Vec<String>, on_outside: impl Fn() + 'static) {
    let on_outside = use_hook(move || Rc::new(on_outside) as Rc<dyn Fn()>);
    let guard = use_hook(|| Rc::new(RefCell::new(None::<WatchGuard>)));

    {
        let guard = Rc::clone(&guard);
        let root_id = root_id.clone();
        use_effect(move || {
            attach(&root_id, &events, Rc::clone(&on_outside), &guard);
        });
    }

    use_drop(move || {
        if guard.borrow_mut().take().is_some() {
            crate::shared::logging::log_watcher_detached(&root_id);
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn attach(
    root_id: &str,
    events: &[String],
    on_outside: Rc<dyn Fn()>,
    guard: &Rc<RefCell<Option<WatchGuard>>>,
) {
    use crate::shared::logging;
    use crate::shared::outside_click::{DomOutsideClickWatcher, OutsideInteractionWatcher};

    if guard.borrow().is_some() {
        return;
    }

    let watcher = DomOutsideClickWatcher::new(events.to_vec());
    let root_label = root_id.to_string();
    let callback: Rc<dyn Fn()> = Rc::new(move || {
        logging::log_outside_interaction(&root_label);
        on_outside();
    });

    let attached = DomOutsideClickWatcher::root_by_id(root_id)
        .and_then(|root| watcher.attach(&root, callback));

    match attached {
        Ok(new_guard) => {
            logging::log_watcher_attached(root_id, events.len());
            *guard.borrow_mut() = Some(new_guard);
        }
        Err(err) => logging::log_watcher_unavailable(root_id, &err),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn attach(
    _root_id: &str,
    _events: &[String],
    _on_outside: Rc<dyn Fn()>,
    _guard: &Rc<RefCell<Option<WatchGuard>>>,
) {
}
