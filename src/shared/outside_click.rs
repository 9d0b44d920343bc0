//! Outside-interaction detection
//!
//! A watcher is attached to the root of a rendered subtree and calls back on
//! every pointer-down whose target lies outside that subtree. Attaching
//! returns a `WatchGuard`; the listener is removed when the guard drops.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::shared::errors::{AppError, Result};

/// Pointer events that count as an outside interaction by default
pub const DEFAULT_OUTSIDE_EVENTS: [&str; 2] = ["mousedown", "touchstart"];

/// Capability for detecting interactions outside a subtree
pub trait OutsideInteractionWatcher {
    /// Handle identifying the subtree root
    type Root;

    fn attach(&self, root: &Self::Root, on_outside: Rc<dyn Fn()>) -> Result<WatchGuard>;
}

/// Keeps a watcher attached; detaches on drop
#[must_use = "dropping a WatchGuard detaches the watcher immediately"]
pub struct WatchGuard {
    detach: Option<Box<dyn FnOnce()>>,
}

impl WatchGuard {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn detach(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl std::fmt::Debug for WatchGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchGuard")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

// ============================================
// In-memory node tree
// ============================================

/// Node handle inside a `SimulatedDom`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

struct Listener {
    id: u64,
    root: NodeId,
    on_outside: Rc<dyn Fn()>,
}

#[derive(Default)]
struct DomTree {
    parents: Vec<Option<NodeId>>,
    listeners: Vec<Listener>,
    next_listener: u64,
}

impl DomTree {
    fn check(&self, node: NodeId) -> Result<()> {
        if node.0 < self.parents.len() {
            Ok(())
        } else {
            Err(AppError::UnknownNode(node.0))
        }
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parents.get(id.0).copied().flatten();
        }
        false
    }
}

/// Node tree with pointer-down dispatch, for hosts without a browser DOM and
/// for exercising the outside-click contract in tests
#[derive(Clone)]
pub struct SimulatedDom {
    tree: Rc<RefCell<DomTree>>,
}

impl SimulatedDom {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        let tree = DomTree {
            parents: vec![None],
            ..DomTree::default()
        };
        Self {
            tree: Rc::new(RefCell::new(tree)),
        }
    }

    pub fn document(&self) -> NodeId {
        NodeId(0)
    }

    pub fn append_child(&self, parent: NodeId) -> Result<NodeId> {
        let mut tree = self.tree.borrow_mut();
        tree.check(parent)?;
        tree.parents.push(Some(parent));
        Ok(NodeId(tree.parents.len() - 1))
    }

    /// True when `node` is `ancestor` or one of its descendants
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.borrow().contains(ancestor, node)
    }

    /// Dispatch a pointer-down on `target`, returning how many watchers
    /// considered it an outside interaction
    pub fn dispatch_pointer_down(&self, target: NodeId) -> Result<usize> {
        let callbacks: Vec<Rc<dyn Fn()>> = {
            let tree = self.tree.borrow();
            tree.check(target)?;
            tree.listeners
                .iter()
                .filter(|listener| !tree.contains(listener.root, target))
                .map(|listener| Rc::clone(&listener.on_outside))
                .collect()
        };

        for callback in &callbacks {
            callback();
        }
        Ok(callbacks.len())
    }

    pub fn listener_count(&self) -> usize {
        self.tree.borrow().listeners.len()
    }
}

impl Default for SimulatedDom {
    fn default() -> Self {
        Self::new()
    }
}

impl OutsideInteractionWatcher for SimulatedDom {
    type Root = NodeId;

    fn attach(&self, root: &NodeId, on_outside: Rc<dyn Fn()>) -> Result<WatchGuard> {
        let id = {
            let mut tree = self.tree.borrow_mut();
            tree.check(*root)?;
            let id = tree.next_listener;
            tree.next_listener += 1;
            tree.listeners.push(Listener {
                id,
                root: *root,
                on_outside,
            });
            id
        };

        let weak: Weak<RefCell<DomTree>> = Rc::downgrade(&self.tree);
        Ok(WatchGuard::new(move || {
            if let Some(tree) = weak.upgrade() {
                tree.borrow_mut().listeners.retain(|listener| listener.id != id);
            }
        }))
    }
}

// ============================================
// Browser DOM
// ============================================

/// Listens on `document` and compares event targets against the root element
#[cfg(target_arch = "wasm32")]
pub struct DomOutsideClickWatcher {
    events: Vec<String>,
}

#[cfg(target_arch = "wasm32")]
impl DomOutsideClickWatcher {
    pub fn new(events: Vec<String>) -> Self {
        Self { events }
    }

    /// Look up the subtree root by element id
    pub fn root_by_id(id: &str) -> Result<web_sys::Element> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| AppError::Dom("document unavailable".to_string()))?;
        document
            .get_element_by_id(id)
            .ok_or_else(|| AppError::Dom(format!("element #{} not found", id)))
    }
}

#[cfg(target_arch = "wasm32")]
impl OutsideInteractionWatcher for DomOutsideClickWatcher {
    type Root = web_sys::Element;

    fn attach(&self, root: &web_sys::Element, on_outside: Rc<dyn Fn()>) -> Result<WatchGuard> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::shared::logging;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| AppError::Dom("document unavailable".to_string()))?;

        let root = root.clone();
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
            if !root.contains(target.as_ref()) {
                on_outside();
            }
        });

        let function: js_sys::Function = listener.as_ref().unchecked_ref::<js_sys::Function>().clone();

        // Events registered so far; a failed registration drops the guard and
        // removes the ones already added
        let registered = Rc::new(RefCell::new(Vec::<String>::new()));
        let guard = {
            let document = document.clone();
            let registered = Rc::clone(&registered);
            let function = function.clone();
            WatchGuard::new(move || {
                for event in registered.borrow().iter() {
                    if let Err(err) = document.remove_event_listener_with_callback(event, &function) {
                        logging::log_watcher_detach_failed(event, &format!("{:?}", err));
                    }
                }
                drop(listener);
            })
        };

        for event in &self.events {
            document
                .add_event_listener_with_callback(event, &function)
                .map_err(|err| AppError::Dom(format!("addEventListener({}) failed: {:?}", event, err)))?;
            registered.borrow_mut().push(event.clone());
        }

        Ok(guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Rc<dyn Fn()>) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, Rc::new(move || handle.set(handle.get() + 1)))
    }

    #[test]
    fn test_contains_walks_ancestors() {
        let dom = SimulatedDom::new();
        let root = dom.append_child(dom.document()).unwrap();
        let child = dom.append_child(root).unwrap();
        let grandchild = dom.append_child(child).unwrap();
        let sibling = dom.append_child(dom.document()).unwrap();

        assert!(dom.contains(root, root));
        assert!(dom.contains(root, grandchild));
        assert!(!dom.contains(root, sibling));
        assert!(!dom.contains(child, root));
    }

    #[test]
    fn test_outside_pointer_down_invokes_callback_once() {
        let dom = SimulatedDom::new();
        let root = dom.append_child(dom.document()).unwrap();
        let elsewhere = dom.append_child(dom.document()).unwrap();
        let (count, on_outside) = counter();
        let _guard = dom.attach(&root, on_outside).unwrap();

        assert_eq!(dom.dispatch_pointer_down(elsewhere).unwrap(), 1);
        assert_eq!(dom.dispatch_pointer_down(dom.document()).unwrap(), 1);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_inside_pointer_down_is_ignored() {
        let dom = SimulatedDom::new();
        let root = dom.append_child(dom.document()).unwrap();
        let item = dom.append_child(root).unwrap();
        let (count, on_outside) = counter();
        let _guard = dom.attach(&root, on_outside).unwrap();

        assert_eq!(dom.dispatch_pointer_down(item).unwrap(), 0);
        assert_eq!(dom.dispatch_pointer_down(root).unwrap(), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_guard_drop_detaches() {
        let dom = SimulatedDom::new();
        let root = dom.append_child(dom.document()).unwrap();
        let (count, on_outside) = counter();
        let guard = dom.attach(&root, on_outside).unwrap();
        assert_eq!(dom.listener_count(), 1);

        guard.detach();
        dom.dispatch_pointer_down(dom.document()).unwrap();

        assert_eq!(dom.listener_count(), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_unknown_nodes_are_rejected() {
        let dom = SimulatedDom::new();
        let other = SimulatedDom::new();
        let foreign = other.append_child(other.document()).unwrap();
        let (_count, on_outside) = counter();

        assert!(matches!(dom.attach(&foreign, on_outside), Err(AppError::UnknownNode(1))));
        assert!(matches!(dom.dispatch_pointer_down(foreign), Err(AppError::UnknownNode(1))));
        assert!(dom.append_child(foreign).is_err());
    }
}
