// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mobile sidebar overlay dismissal.
//!
//! The open/closed state lives in a hidden checkbox toggled by a label; CSS does
//! the rest. This controller only forces the checkbox off when the user clicks
//! the wrapper background. Content inside the wrapper shares the same ancestor,
//! so only a click whose target *is* the wrapper counts.
//!
//! Escape does not close the sidebar unless configured to. Search closes on
//! Escape; the sidebar historically did not, and that is kept as the default.

use crate::widgets::page::PageNode;

/// The checkbox carrying the sidebar state.
pub trait SidebarToggle {
    fn is_open(&self) -> bool;
    fn close(&self);
}

/// Where a click on the wrapper landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The wrapper element itself (the dimmed background)
    Wrapper,
    /// Page content nested inside the wrapper
    Descendant,
}

impl ClickTarget {
    /// Only the wrapper itself counts; anything nested inside it does not.
    pub fn classify<N: PageNode>(target: Option<&N>, wrapper: &N) -> Self {
        match target {
            Some(node) if wrapper.is_same_as(node) => Self::Wrapper,
            _ => Self::Descendant,
        }
    }
}

pub struct SidebarDismissal<T> {
    toggle: T,
    close_on_escape: bool,
}

impl<T: SidebarToggle> SidebarDismissal<T> {
    pub fn new(toggle: T, close_on_escape: bool) -> Self {
        Self {
            toggle,
            close_on_escape,
        }
    }

    pub fn toggle(&self) -> &T {
        &self.toggle
    }

    /// Close on a direct wrapper hit while open. Returns `true` if it closed.
    pub fn handle_wrapper_click(&self, target: ClickTarget) -> bool {
        if target != ClickTarget::Wrapper || !self.toggle.is_open() {
            return false;
        }
        self.toggle.close();
        true
    }

    /// Document keydown. Inert unless `close_on_escape` was set.
    pub fn handle_keydown(&self, key: &str) -> bool {
        if !self.close_on_escape || key != "Escape" || !self.toggle.is_open() {
            return false;
        }
        self.toggle.close();
        true
    }
}
