use crate::input_mode::InputMode;
use crate::message_state::MessageState;
use crate::session::Session;
use crate::table_list_state::TableListState;
use crate::view_state::ViewState;

#[derive(Debug, Clone)]
pub struct AppState {
    pub session: Session,
    pub view: ViewState,
    pub messages: MessageState,
    /// Unrecoverable database failure. Once set, only quit is accepted.
    pub fatal_error: Option<String>,
    pub cursor_visible: bool,
    pub show_full_help: bool,
    pub should_quit: bool,
    render_dirty: bool,
}

impl AppState {
    /// Starts on the table list with the first table selected.
    pub fn new(session: Session) -> Self {
        let view = ViewState::TableList(TableListState::new(&session, 0));
        Self {
            session,
            view,
            messages: MessageState::default(),
            fatal_error: None,
            cursor_visible: true,
            show_full_help: false,
            should_quit: false,
            render_dirty: true,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        if self.fatal_error.is_some() {
            InputMode::Fatal
        } else {
            self.view.input_mode()
        }
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.render_dirty
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }
}
