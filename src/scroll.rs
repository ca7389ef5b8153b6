//! Viewport scroll notifications.
//!
//! Components never reach for `window` themselves: the app provides a
//! [`ViewportScroll`] through context and [`use_scroll_past`] subscribes to
//! it for the lifetime of the component.

use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::state::ScrollState;

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("scroll listener could not be registered: {0}")]
    Listen(String),
}

/// Something that reports vertical scroll offsets.
pub trait ScrollSource {
    /// Whatever the source needs back to remove a listener.
    type Handle;

    fn offset(&self) -> Option<f64>;
    fn listen(&self, on_scroll: Callback<f64>) -> Result<Self::Handle, ScrollError>;
    fn unlisten(&self, handle: Self::Handle);
}

/// Live listener registration. Dropping it removes the listener.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    /// Registers `on_scroll` and reports the current offset once right away.
    pub fn attach(source: S, on_scroll: Callback<f64>) -> Result<Self, ScrollError> {
        let handle = source.listen(on_scroll.clone())?;
        if let Some(offset) = source.offset() {
            on_scroll.emit(offset);
        }
        Ok(Self {
            source,
            handle: Some(handle),
        })
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unlisten(handle);
        }
    }
}

/// The browser window as a scroll source.
#[derive(Clone)]
pub struct ViewportScroll {
    window: Rc<web_sys::Window>,
}

impl ViewportScroll {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self {
            window: Rc::new(window),
        })
    }
}

impl PartialEq for ViewportScroll {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.window, &other.window)
    }
}

impl ScrollSource for ViewportScroll {
    type Handle = Closure<dyn Fn()>;

    fn offset(&self) -> Option<f64> {
        self.window.scroll_y().ok()
    }

    fn listen(&self, on_scroll: Callback<f64>) -> Result<Self::Handle, ScrollError> {
        let window = self.window.clone();
        let callback = Closure::<dyn Fn()>::new(move || {
            if let Ok(scroll_y) = window.scroll_y() {
                on_scroll.emit(scroll_y);
            }
        });
        self.window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|e| ScrollError::Listen(format!("{:?}", e)))?;
        Ok(callback)
    }

    fn unlisten(&self, handle: Self::Handle) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", handle.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", e);
        }
    }
}

/// Whether the viewport is scrolled past `threshold` pixels.
///
/// Stays `false` when no [`ViewportScroll`] is provided.
#[hook]
pub fn use_scroll_past(threshold: f64) -> bool {
    let viewport = use_context::<ViewportScroll>();
    let tracker = use_mut_ref(|| ScrollState::new(threshold));
    let past = use_state_eq(|| false);

    {
        let past = past.clone();
        use_effect_with_deps(
            move |viewport: &Option<ViewportScroll>| {
                let subscription = viewport.clone().and_then(|viewport| {
                    let on_scroll = Callback::from(move |offset: f64| {
                        let mut tracker = tracker.borrow_mut();
                        if tracker.update(offset) {
                            debug!(
                                "Scroll offset {} crossed threshold, past: {}",
                                offset,
                                tracker.is_past_threshold()
                            );
                        }
                        past.set(tracker.is_past_threshold());
                    });
                    match ScrollSubscription::attach(viewport, on_scroll) {
                        Ok(subscription) => Some(subscription),
                        Err(e) => {
                            warn!("{}", e);
                            None
                        }
                    }
                });
                move || drop(subscription)
            },
            viewport,
        );
    }

    *past
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    type Listeners = Rc<RefCell<Vec<Option<Callback<f64>>>>>;

    #[derive(Clone, Default)]
    struct FakeScroll {
        offset: Rc<RefCell<f64>>,
        listeners: Listeners,
    }

    impl FakeScroll {
        fn scroll_to(&self, offset: f64) {
            *self.offset.borrow_mut() = offset;
            let listeners: Vec<Callback<f64>> =
                self.listeners.borrow().iter().flatten().cloned().collect();
            for listener in listeners {
                listener.emit(offset);
            }
        }

        fn active(&self) -> usize {
            self.listeners.borrow().iter().flatten().count()
        }
    }

    impl ScrollSource for FakeScroll {
        type Handle = usize;

        fn offset(&self) -> Option<f64> {
            Some(*self.offset.borrow())
        }

        fn listen(&self, on_scroll: Callback<f64>) -> Result<usize, ScrollError> {
            let mut listeners = self.listeners.borrow_mut();
            listeners.push(Some(on_scroll));
            Ok(listeners.len() - 1)
        }

        fn unlisten(&self, handle: usize) {
            self.listeners.borrow_mut()[handle] = None;
        }
    }

    struct FailingScroll;

    impl ScrollSource for FailingScroll {
        type Handle = ();

        fn offset(&self) -> Option<f64> {
            None
        }

        fn listen(&self, _on_scroll: Callback<f64>) -> Result<(), ScrollError> {
            Err(ScrollError::Listen("no viewport".to_string()))
        }

        fn unlisten(&self, _handle: ()) {}
    }

    fn recording_tracker() -> (Callback<f64>, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let state = Rc::new(RefCell::new(ScrollState::new(50.0)));
        let callback = {
            let seen = seen.clone();
            Callback::from(move |offset: f64| {
                let mut state = state.borrow_mut();
                state.update(offset);
                seen.borrow_mut().push(state.is_past_threshold());
            })
        };
        (callback, seen)
    }

    #[test]
    fn attach_reports_current_offset() {
        let source = FakeScroll::default();
        *source.offset.borrow_mut() = 120.0;
        let (callback, seen) = recording_tracker();

        let _subscription = ScrollSubscription::attach(source.clone(), callback).expect("attach");
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn scroll_sequence_drives_threshold_flag() {
        let source = FakeScroll::default();
        let (callback, seen) = recording_tracker();

        let _subscription = ScrollSubscription::attach(source.clone(), callback).expect("attach");
        source.scroll_to(60.0);
        source.scroll_to(40.0);

        assert_eq!(*seen.borrow(), vec![false, true, false]);
    }

    #[test]
    fn drop_removes_listener() {
        let source = FakeScroll::default();
        let (callback, seen) = recording_tracker();

        let subscription = ScrollSubscription::attach(source.clone(), callback).expect("attach");
        assert_eq!(source.active(), 1);
        drop(subscription);
        assert_eq!(source.active(), 0);

        source.scroll_to(80.0);
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn repeated_mounts_leave_no_listeners() {
        let source = FakeScroll::default();
        for _ in 0..5 {
            let (callback, _seen) = recording_tracker();
            let subscription =
                ScrollSubscription::attach(source.clone(), callback).expect("attach");
            assert_eq!(source.active(), 1);
            drop(subscription);
        }
        assert_eq!(source.active(), 0);
    }

    #[test]
    fn failed_registration_is_reported() {
        let (callback, seen) = recording_tracker();
        let result = ScrollSubscription::attach(FailingScroll, callback);
        assert!(matches!(result, Err(ScrollError::Listen(_))));
        assert!(seen.borrow().is_empty());
    }
}
