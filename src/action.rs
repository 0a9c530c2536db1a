use crate::error::ResolveError;

/// Editor action requested by the text field owner for the current edit
/// session. Wire codes follow the host input-method protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorAction {
    Unspecified,
    None,
    Go,
    Search,
    Send,
    Next,
    Done,
    Previous,
}

impl EditorAction {
    pub const ALL: &'static [EditorAction] = &[
        EditorAction::Unspecified,
        EditorAction::None,
        EditorAction::Go,
        EditorAction::Search,
        EditorAction::Send,
        EditorAction::Next,
        EditorAction::Done,
        EditorAction::Previous,
    ];

    /// Decode a host wire code. Codes outside the recognized set are an
    /// integration bug and fail loudly instead of defaulting to Enter.
    pub fn from_code(code: u32) -> Result<Self, ResolveError> {
        match code {
            0 => Ok(EditorAction::Unspecified),
            1 => Ok(EditorAction::None),
            2 => Ok(EditorAction::Go),
            3 => Ok(EditorAction::Search),
            4 => Ok(EditorAction::Send),
            5 => Ok(EditorAction::Next),
            6 => Ok(EditorAction::Done),
            7 => Ok(EditorAction::Previous),
            other => Err(ResolveError::UnknownAction(other)),
        }
    }

    pub fn code(self) -> u32 {
        match self {
            EditorAction::Unspecified => 0,
            EditorAction::None => 1,
            EditorAction::Go => 2,
            EditorAction::Search => 3,
            EditorAction::Send => 4,
            EditorAction::Next => 5,
            EditorAction::Done => 6,
            EditorAction::Previous => 7,
        }
    }

    /// Collapse the action into its display slot. Total over the enum, so a
    /// new editor action forces a decision here at compile time.
    pub fn slot(self) -> ActionSlot {
        match self {
            EditorAction::Unspecified | EditorAction::None => ActionSlot::Enter,
            EditorAction::Search => ActionSlot::Search,
            EditorAction::Go => ActionSlot::Label(LabelSlot::Go),
            EditorAction::Send => ActionSlot::Label(LabelSlot::Send),
            EditorAction::Next => ActionSlot::Label(LabelSlot::Next),
            EditorAction::Done => ActionSlot::Label(LabelSlot::Done),
            EditorAction::Previous => ActionSlot::Label(LabelSlot::Previous),
        }
    }
}

/// Display slot of an action key: a universal icon, or a localized label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionSlot {
    Enter,
    Search,
    Label(LabelSlot),
}

/// The five actions rendered as localized text rather than an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelSlot {
    Go,
    Send,
    Next,
    Done,
    Previous,
}

impl LabelSlot {
    /// Symbolic text id used to fetch this slot's label from a resource set.
    pub fn text_id(self) -> &'static str {
        match self {
            LabelSlot::Go => "label_go_key",
            LabelSlot::Send => "label_send_key",
            LabelSlot::Next => "label_next_key",
            LabelSlot::Done => "label_done_key",
            LabelSlot::Previous => "label_previous_key",
        }
    }
}
