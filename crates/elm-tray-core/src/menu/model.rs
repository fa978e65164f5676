use crate::MenuAction;

/// One node of the menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Selectable leaf.
    Action {
        /// Display text.
        label: String,
        /// Dispatched on selection.
        action: MenuAction,
    },
    /// Nested submenu.
    Group {
        /// Display text.
        label: String,
        /// Ordered children.
        children: Vec<MenuEntry>,
    },
    /// Visual divider.
    Separator,
}

impl MenuEntry {
    pub(crate) fn action<S: Into<String>>(label: S, action: MenuAction) -> Self {
        MenuEntry::Action {
            label: label.into(),
            action,
        }
    }

    /// Display text, or `None` for separators.
    pub fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Action { label, .. } | MenuEntry::Group { label, .. } => Some(label),
            MenuEntry::Separator => None,
        }
    }
}

/// Complete menu, rebuilt from scratch on every state change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuModel {
    /// Top-level entries in display order.
    pub entries: Vec<MenuEntry>,
}
