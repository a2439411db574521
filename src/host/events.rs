//! Event table - Which `on*` attributes become listeners.
//!
//! Instead of asking the host whether `on<name>` exists somewhere in its global
//! namespace, the recognized events are a fixed table. An attribute is an event
//! binding when it starts with `on` and the lower-cased remainder is listed here.

use std::fmt;

use crate::types::EVENT_PREFIX;

// =============================================================================
// Event Kind
// =============================================================================

macro_rules! event_table {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A recognized host event.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EventKind {
            $($variant),+
        }

        impl EventKind {
            /// Every recognized event, in table order.
            pub const ALL: &'static [EventKind] = &[$(EventKind::$variant),+];

            /// Host event name (`"click"`, `"keydown"`, ...).
            pub fn name(self) -> &'static str {
                match self {
                    $(EventKind::$variant => $name),+
                }
            }

            /// Look up a lower-case host event name.
            pub fn from_name(name: &str) -> Option<EventKind> {
                match name {
                    $($name => Some(EventKind::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

event_table! {
    Click => "click",
    DblClick => "dblclick",
    ContextMenu => "contextmenu",
    MouseDown => "mousedown",
    MouseUp => "mouseup",
    MouseMove => "mousemove",
    MouseEnter => "mouseenter",
    MouseLeave => "mouseleave",
    MouseOver => "mouseover",
    MouseOut => "mouseout",
    Wheel => "wheel",
    KeyDown => "keydown",
    KeyUp => "keyup",
    KeyPress => "keypress",
    Focus => "focus",
    Blur => "blur",
    Input => "input",
    Change => "change",
    Submit => "submit",
    Reset => "reset",
    Select => "select",
    Scroll => "scroll",
    Load => "load",
    Error => "error",
    DragStart => "dragstart",
    Drag => "drag",
    DragEnd => "dragend",
    Drop => "drop",
    TouchStart => "touchstart",
    TouchMove => "touchmove",
    TouchEnd => "touchend",
    PointerDown => "pointerdown",
    PointerUp => "pointerup",
    PointerMove => "pointermove",
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify an attribute name as an event binding.
///
/// `onClick` and `onclick` both map to [`EventKind::Click`]. Names without the
/// `on` prefix, or whose remainder is not in the table, return `None`.
pub fn event_for_attribute(name: &str) -> Option<EventKind> {
    if !name.starts_with(EVENT_PREFIX) {
        return None;
    }
    let lowered = name.to_ascii_lowercase();
    EventKind::from_name(&lowered[EVENT_PREFIX.len()..])
}

// =============================================================================
// Event
// =============================================================================

/// Event payload passed to listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    /// Identifier of the node the event was dispatched on, as the host renders it.
    pub target: String,
    /// Optional value carried by input-like events.
    pub value: Option<String>,
}

impl Event {
    pub fn new(kind: EventKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_table_roundtrips_names() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_name(kind.name()), Some(*kind));
        }
    }

    #[test]
    fn test_event_for_attribute() {
        assert_eq!(event_for_attribute("onClick"), Some(EventKind::Click));
        assert_eq!(event_for_attribute("onclick"), Some(EventKind::Click));
        assert_eq!(event_for_attribute("onKeyDown"), Some(EventKind::KeyDown));
        assert_eq!(event_for_attribute("onFrobnicate"), None);
        assert_eq!(event_for_attribute("click"), None);
        assert_eq!(event_for_attribute("on"), None);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        // Only the remainder is lower-cased, the prefix itself must be `on`.
        assert_eq!(event_for_attribute("OnClick"), None);
    }
}
