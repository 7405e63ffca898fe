pub mod fixtures;

use std::path::Path;
use std::time::Instant;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use litetui::app::action::Action;
use litetui::app::dispatcher::Dispatcher;
use litetui::app::ports::Renderer;
use litetui::app::session::Session;
use litetui::app::state::AppState;
use litetui::infra::adapters::SqliteAdapter;
use litetui::ui::components::layout::MainLayout;
use litetui::ui::event::Event;
use litetui::ui::event::handler::handle_event;

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &AppState) -> String {
    terminal
        .draw(|frame| MainLayout::render(frame, state))
        .unwrap();

    buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}

/// Draws into an in-memory terminal, like the real renderer does.
pub struct TestRenderer {
    terminal: Terminal<TestBackend>,
}

impl Renderer for TestRenderer {
    fn draw(&mut self, state: &AppState) -> Result<()> {
        self.terminal
            .draw(|frame| MainLayout::render(frame, state))?;
        Ok(())
    }
}

/// The full stack over an on-disk database, driven by key presses.
pub struct TestApp {
    pub dispatcher: Dispatcher,
    pub state: AppState,
    renderer: TestRenderer,
}

impl TestApp {
    pub fn open(path: &Path) -> Self {
        let adapter = SqliteAdapter::open(path).unwrap();
        let mut session = Session::new();
        session.load_table_names(&adapter).unwrap();
        session.resize(TEST_WIDTH, TEST_HEIGHT);

        let mut app = Self {
            dispatcher: Dispatcher::new(Box::new(adapter)),
            state: AppState::new(session),
            renderer: TestRenderer {
                terminal: create_test_terminal(),
            },
        };
        app.dispatch(Action::Render);
        app
    }

    pub fn dispatch(&mut self, action: Action) {
        self.dispatcher
            .dispatch(action, &mut self.state, &mut self.renderer, Instant::now())
            .unwrap();
    }

    pub fn press(&mut self, code: KeyCode) {
        self.press_with(code, KeyModifiers::NONE);
    }

    pub fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let action = handle_event(Event::Key(KeyEvent::new(code, modifiers)), &self.state);
        self.dispatch(action);
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    pub fn screen(&self) -> String {
        buffer_to_string(self.renderer.terminal.backend().buffer())
    }
}
