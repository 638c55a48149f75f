//! Guarded access to the state shared between listeners and exported methods.
//!
//! A handler can fire while another one still holds the state (a JS call
//! made from inside a listener, for instance). These helpers skip the work
//! and log instead of panicking on the `RefCell`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Run `f` on the live state, if it still exists and is not already
/// borrowed by an outer handler.
pub fn with_state<S>(state: &Weak<RefCell<S>>, f: impl FnOnce(&mut S)) -> bool {
    let Some(state) = state.upgrade() else {
        return false;
    };
    match state.try_borrow_mut() {
        Ok(mut app) => {
            f(&mut app);
            true
        }
        Err(_) => {
            log::warn!("Dropped re-entrant event");
            false
        }
    }
}

/// Read from the state, or fall back to `T::default()` while it is
/// mutably borrowed.
pub fn read_state<S, T: Default>(state: &Rc<RefCell<S>>, f: impl FnOnce(&S) -> T) -> T {
    match state.try_borrow() {
        Ok(app) => f(&app),
        Err(_) => {
            log::warn!("State busy, returning default");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_state_runs_on_live_state() {
        let state = Rc::new(RefCell::new(1));
        assert!(with_state(&Rc::downgrade(&state), |n| *n += 1));
        assert_eq!(*state.borrow(), 2);
    }

    #[test]
    fn test_with_state_skips_reentrant_borrow() {
        let state = Rc::new(RefCell::new(1));
        let weak = Rc::downgrade(&state);
        let _outer = state.borrow_mut();
        assert!(!with_state(&weak, |n| *n += 1));
    }

    #[test]
    fn test_with_state_skips_dropped_state() {
        let state = Rc::new(RefCell::new(1));
        let weak = Rc::downgrade(&state);
        drop(state);
        assert!(!with_state(&weak, |n: &mut i32| *n += 1));
    }

    #[test]
    fn test_read_state_defaults_while_borrowed() {
        let state = Rc::new(RefCell::new(7usize));
        assert_eq!(read_state(&state, |n| *n), 7);

        let _outer = state.borrow_mut();
        assert_eq!(read_state(&state, |n| *n), 0);
        assert!(!read_state(&state, |_| true));
    }
}
