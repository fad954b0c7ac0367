//! Bound actions and the invocation adapter.
//!
//! An element is configured once (label + action + payload) without knowing
//! the action's signature. The signature is carried by an explicit [`Arity`]
//! tag chosen when the [`Action`] is built, and [`Action::invoke`] switches
//! on it:
//!
//! | arity      | called with                                  |
//! |------------|----------------------------------------------|
//! | `Zero`     | nothing; the payload is ignored              |
//! | `One`      | the payload whole (`Nil` when absent)        |
//! | `Many(n)`  | the payload's `n` sequence items, in order   |

use std::fmt;

use tuikit_core::{Error, Result};

use crate::page::PageId;
use crate::value::Value;

// ---------------------------------------------------------------------------
// Nav
// ---------------------------------------------------------------------------

/// Navigation requested by an action, applied by the menu once the action
/// returns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Nav {
    #[default]
    Stay,
    Goto(PageId),
    GotoIndex(usize),
    Next,
    Prev,
    /// End the interactive loop.
    Quit,
}

/// Conversion of an action's return value into a [`Nav`].
pub trait IntoNav {
    fn into_nav(self) -> Nav;
}

impl IntoNav for () {
    fn into_nav(self) -> Nav {
        Nav::Stay
    }
}

impl IntoNav for Nav {
    fn into_nav(self) -> Nav {
        self
    }
}

// ---------------------------------------------------------------------------
// Arity
// ---------------------------------------------------------------------------

/// How many positional arguments an action takes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Zero,
    One,
    Many(usize),
}

impl Arity {
    /// The argument count.
    pub const fn count(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Many(n) => n,
        }
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

enum Callable {
    Zero(Box<dyn FnMut() -> Nav>),
    One(Box<dyn FnMut(&Value) -> Nav>),
    Many(usize, Box<dyn FnMut(&[Value]) -> Nav>),
}

/// A callable bound to an element.
pub struct Action {
    call: Callable,
}

impl Action {
    /// An action taking no arguments.
    pub fn nullary<F, R>(mut f: F) -> Self
    where
        F: FnMut() -> R + 'static,
        R: IntoNav,
    {
        Self {
            call: Callable::Zero(Box::new(move || f().into_nav())),
        }
    }

    /// An action taking the element's payload as a single argument.
    pub fn unary<F, R>(mut f: F) -> Self
    where
        F: FnMut(&Value) -> R + 'static,
        R: IntoNav,
    {
        Self {
            call: Callable::One(Box::new(move |v: &Value| f(v).into_nav())),
        }
    }

    /// An action taking `n` positional arguments, unpacked from a
    /// [`Value::Seq`] payload of exactly that length.
    ///
    /// `n == 0` behaves like [`nullary`](Self::nullary) and `f` gets an empty
    /// slice. `n == 1` behaves like [`unary`](Self::unary) and `f` gets the
    /// whole payload as a one-item slice.
    pub fn variadic<F, R>(n: usize, mut f: F) -> Self
    where
        F: FnMut(&[Value]) -> R + 'static,
        R: IntoNav,
    {
        let call = match n {
            0 => Callable::Zero(Box::new(move || f(&[]).into_nav())),
            1 => Callable::One(Box::new(move |v: &Value| {
                f(std::slice::from_ref(v)).into_nav()
            })),
            _ => Callable::Many(n, Box::new(move |args: &[Value]| f(args).into_nav())),
        };
        Self { call }
    }

    /// The declared arity.
    pub fn arity(&self) -> Arity {
        match self.call {
            Callable::Zero(_) => Arity::Zero,
            Callable::One(_) => Arity::One,
            Callable::Many(n, _) => Arity::Many(n),
        }
    }

    /// Check that `payload` fits this action without calling it.
    pub fn check(&self, payload: Option<&Value>) -> Result<()> {
        if let Callable::Many(n, _) = self.call {
            unpack(n, payload)?;
        }
        Ok(())
    }

    /// Call the action with `payload` shaped for its arity.
    ///
    /// A zero-arity action ignores its payload, even a sequence.
    pub fn invoke(&mut self, payload: Option<&Value>) -> Result<Nav> {
        match &mut self.call {
            Callable::Zero(f) => Ok(f()),
            Callable::One(f) => Ok(f(payload.unwrap_or(&Value::Nil))),
            Callable::Many(n, f) => {
                let args = unpack(*n, payload)?;
                Ok(f(args))
            }
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

fn unpack(n: usize, payload: Option<&Value>) -> Result<&[Value]> {
    let found = match payload {
        Some(Value::Seq(items)) if items.len() == n => return Ok(items),
        Some(Value::Seq(items)) => items.len(),
        None | Some(Value::Nil) => 0,
        Some(_) => 1,
    };
    Err(Error::InvalidInvocation { expected: n, found })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn log() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn nullary_ignores_payload() {
        let calls = log();
        let c = calls.clone();
        let mut a = Action::nullary(move || c.borrow_mut().push("called".into()));
        assert_eq!(a.arity(), Arity::Zero);
        a.invoke(None).unwrap();
        a.invoke(Some(&(1, 2).into())).unwrap();
        assert_eq!(*calls.borrow(), vec!["called", "called"]);
    }

    #[test]
    fn unary_receives_payload_whole() {
        let calls = log();
        let c = calls.clone();
        let mut a = Action::unary(move |v: &Value| c.borrow_mut().push(v.to_string()));
        a.invoke(Some(&(1, 2, 3).into())).unwrap();
        a.invoke(Some(&Value::from("hi"))).unwrap();
        a.invoke(None).unwrap();
        assert_eq!(*calls.borrow(), vec!["(1, 2, 3)", "hi", "nil"]);
    }

    #[test]
    fn variadic_unpacks() {
        let sum = Rc::new(RefCell::new(Vec::new()));
        let s = sum.clone();
        let mut a = Action::variadic(3, move |args: &[Value]| {
            s.borrow_mut()
                .push(args.iter().filter_map(Value::as_int).collect::<Vec<_>>());
        });
        assert_eq!(a.arity(), Arity::Many(3));
        a.invoke(Some(&(1, 2, 5).into())).unwrap();
        assert_eq!(*sum.borrow(), vec![vec![1, 2, 5]]);
    }

    #[test]
    fn variadic_shape_mismatch() {
        let mut a = Action::variadic(3, |_: &[Value]| {});
        let err = a.invoke(Some(&(1, 2).into())).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInvocation {
                expected: 3,
                found: 2
            }
        ));
        assert!(matches!(
            a.invoke(None),
            Err(Error::InvalidInvocation { found: 0, .. })
        ));
        assert!(matches!(
            a.check(Some(&Value::from(7))),
            Err(Error::InvalidInvocation { found: 1, .. })
        ));
        assert!(a.check(Some(&(1, 2, 3).into())).is_ok());
    }

    #[test]
    fn low_counts_fold_into_fixed_arities() {
        let calls = log();
        let c = calls.clone();
        let mut none = Action::variadic(0, move |args: &[Value]| {
            c.borrow_mut().push(format!("{} args", args.len()));
        });
        assert_eq!(none.arity(), Arity::Zero);
        assert!(none.check(None).is_ok());
        none.invoke(None).unwrap();
        none.invoke(Some(&(1, 2).into())).unwrap();

        let c = calls.clone();
        let mut one = Action::variadic(1, move |args: &[Value]| {
            c.borrow_mut().push(Value::Seq(args.to_vec()).to_string());
        });
        assert_eq!(one.arity(), Arity::One);
        one.invoke(Some(&Value::from(7))).unwrap();
        one.invoke(Some(&(1, 2).into())).unwrap();
        one.invoke(None).unwrap();

        assert_eq!(
            *calls.borrow(),
            vec!["0 args", "0 args", "(7)", "((1, 2))", "(nil)"]
        );
    }

    #[test]
    fn returns_nav() {
        let mut a = Action::nullary(|| Nav::Quit);
        assert_eq!(a.invoke(None).unwrap(), Nav::Quit);
        let mut b = Action::nullary(|| ());
        assert_eq!(b.invoke(None).unwrap(), Nav::Stay);
    }

    #[test]
    fn check_passes_for_fixed_arities() {
        let a = Action::unary(|_: &Value| {});
        assert!(a.check(None).is_ok());
        let b = Action::nullary(|| {});
        assert!(b.check(Some(&(1, 2).into())).is_ok());
    }
}
