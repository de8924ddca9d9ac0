use ratatui::layout::Rect;

use crate::form::{FormFocus, FormRegions};
use crate::suggest::FieldId;
use crate::view::{HistoryMenuItem, Tab};

/// Something the user can click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Tab(Tab),
    FormControl(FormFocus),
    /// Entry `index` of a field's open dropdown
    Suggestion { field: FieldId, index: usize },
    HistoryItem(HistoryMenuItem),
    /// Close control of a history list
    HistoryBack,
    ModalButton,
}

/// Areas of the last rendered frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub tabs: Vec<(Tab, Rect)>,
    pub form: FormRegions,
    pub history_items: Vec<(HistoryMenuItem, Rect)>,
    pub history_back: Option<Rect>,
    pub modal_button: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything; called at the start of each frame
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
