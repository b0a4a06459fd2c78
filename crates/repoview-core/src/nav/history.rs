//! Navigation history with back/forward support.

/// Immutable navigation history with back/forward stacks.
///
/// Every mutation returns a **new** `History` instance. Pushing a path
/// clears the forward stack (same semantics as a web browser). Going back
/// or forward takes the path being left so it can be replayed later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    back_stack: Vec<String>,
    forward_stack: Vec<String>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `left` as the location being navigated away from.
    ///
    /// Pushes it onto the back stack and clears the forward stack.
    pub fn push(&self, left: &str) -> Self {
        let mut back_stack = self.back_stack.clone();
        back_stack.push(left.to_string());
        Self {
            back_stack,
            forward_stack: Vec::new(),
        }
    }

    /// Go back one step from `current`.
    ///
    /// Returns the new History and the path to navigate to, or `None` if the
    /// back stack is empty. `current` is pushed onto the forward stack.
    pub fn go_back(&self, current: &str) -> Option<(Self, String)> {
        let mut back_stack = self.back_stack.clone();
        let target = back_stack.pop()?;
        let mut forward_stack = self.forward_stack.clone();
        forward_stack.push(current.to_string());
        Some((
            Self {
                back_stack,
                forward_stack,
            },
            target,
        ))
    }

    /// Go forward one step from `current`; the mirror of [`go_back`].
    ///
    /// [`go_back`]: History::go_back
    pub fn go_forward(&self, current: &str) -> Option<(Self, String)> {
        let mut forward_stack = self.forward_stack.clone();
        let target = forward_stack.pop()?;
        let mut back_stack = self.back_stack.clone();
        back_stack.push(current.to_string());
        Some((
            Self {
                back_stack,
                forward_stack,
            },
            target,
        ))
    }

    /// Returns `true` if there is at least one entry on the back stack.
    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Returns `true` if there is at least one entry on the forward stack.
    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    pub fn back_len(&self) -> usize {
        self.back_stack.len()
    }

    pub fn forward_len(&self) -> usize {
        self.forward_stack.len()
    }
}
