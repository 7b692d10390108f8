//! Application Context
//!
//! Shared service handles provided via Leptos Context API.

use std::rc::Rc;

use send_wrapper::SendWrapper;

use food_harmony_core::discovery::RestaurantSearch;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Restaurant search service. Swap the implementation passed to
    /// [`AppContext::new`] to point the Discover tab at a real backend.
    ///
    /// Wrapped in [`SendWrapper`] so the non-`Send` `Rc` trait object can be
    /// stored in Leptos context (`provide_context` requires `Send + Sync`).
    /// Access is single-threaded in the CSR/WASM target, so the wrapper never
    /// panics.
    search: SendWrapper<Rc<dyn RestaurantSearch>>,
}

impl AppContext {
    pub fn new(search: Rc<dyn RestaurantSearch>) -> Self {
        Self {
            search: SendWrapper::new(search),
        }
    }

    pub fn search(&self) -> Rc<dyn RestaurantSearch> {
        Rc::clone(&self.search)
    }
}
