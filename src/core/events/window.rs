//=========================================================================
// Window Layer Interface
//=========================================================================
//
// What the dispatcher needs to know about windows, and nothing more.
//
// The window layer owns input requests, line buffers and geometry. The
// dispatcher queries it while translating input:
//
//   key    → focused_window() → input_request() → char / edit_line()
//   click  → window_at()      → pointer_interest()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::WindowId;
use super::keycode::Keycode;

//=== Request & Interest Types ============================================

/// Pending keyboard request on a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputRequest {
    Char,
    Line,
}

/// Which pointer phases a window wants reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerInterest {
    #[default]
    None,
    /// Button presses and releases.
    Clicks,
    /// Presses, releases and motion.
    All,
}

/// Result of feeding one key to a line-input window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// Key consumed, line still being edited.
    Editing,
    /// Line finished. `terminator` is 0 for Return, otherwise the
    /// terminating keycode.
    Complete { length: u32, terminator: u32 },
}

//=== WindowLayer Trait ===================================================

pub trait WindowLayer {
    /// Window that receives keyboard input.
    fn focused_window(&self) -> Option<WindowId>;

    /// Keyboard request pending on `window`, if any.
    fn input_request(&self, window: WindowId) -> Option<InputRequest>;

    /// Feeds a key to a line-input window.
    fn edit_line(&mut self, window: WindowId, keycode: u32) -> LineStatus;

    /// Called after a char-input event was produced for `window`, so a
    /// one-shot request can be cancelled.
    fn char_delivered(&mut self, _window: WindowId) {}

    /// Window under the given screen position.
    fn window_at(&self, x: u32, y: u32) -> Option<WindowId>;

    /// Pointer phases `window` wants to hear about.
    fn pointer_interest(&self, window: WindowId) -> PointerInterest;
}

//=== NoWindows ===========================================================

/// Window layer with no windows. Every key and click is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWindows;

impl WindowLayer for NoWindows {
    fn focused_window(&self) -> Option<WindowId> {
        None
    }

    fn input_request(&self, _window: WindowId) -> Option<InputRequest> {
        None
    }

    fn edit_line(&mut self, _window: WindowId, _keycode: u32) -> LineStatus {
        LineStatus::Editing
    }

    fn window_at(&self, _x: u32, _y: u32) -> Option<WindowId> {
        None
    }

    fn pointer_interest(&self, _window: WindowId) -> PointerInterest {
        PointerInterest::None
    }
}

//=== BasicWindow =========================================================

/// A single full-screen window with one-shot char and line requests.
///
/// Line editing understands printable characters, `Delete` (backspace)
/// and `Return`. Keys listed as terminators also finish the line.
#[derive(Debug, Clone)]
pub struct BasicWindow {
    id: WindowId,
    bounds: (u32, u32),
    request: Option<InputRequest>,
    line: String,
    max_len: usize,
    terminators: Vec<Keycode>,
    pointer: PointerInterest,
}

impl BasicWindow {
    pub fn new(id: WindowId, width: u32, height: u32) -> Self {
        Self {
            id,
            bounds: (width, height),
            request: None,
            line: String::new(),
            max_len: 256,
            terminators: Vec::new(),
            pointer: PointerInterest::None,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn request_char(&mut self) {
        self.request = Some(InputRequest::Char);
    }

    /// Starts line input with an empty buffer of at most `max_len` chars.
    pub fn request_line(&mut self, max_len: usize) {
        self.request = Some(InputRequest::Line);
        self.line.clear();
        self.max_len = max_len;
    }

    pub fn cancel_request(&mut self) {
        self.request = None;
    }

    pub fn set_terminators(&mut self, keys: &[Keycode]) {
        self.terminators = keys.to_vec();
    }

    pub fn set_pointer_interest(&mut self, interest: PointerInterest) {
        self.pointer = interest;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.bounds = (width, height);
    }

    /// Text of the current (or last completed) line.
    pub fn line(&self) -> &str {
        &self.line
    }
}

impl WindowLayer for BasicWindow {
    fn focused_window(&self) -> Option<WindowId> {
        Some(self.id)
    }

    fn input_request(&self, window: WindowId) -> Option<InputRequest> {
        (window == self.id).then_some(self.request).flatten()
    }

    fn edit_line(&mut self, window: WindowId, keycode: u32) -> LineStatus {
        if window != self.id || self.request != Some(InputRequest::Line) {
            return LineStatus::Editing;
        }

        match Keycode::from_u32(keycode) {
            Some(Keycode::Return) => {
                self.request = None;
                return LineStatus::Complete { length: self.line.chars().count() as u32, terminator: 0 };
            }
            Some(key) if self.terminators.contains(&key) => {
                self.request = None;
                return LineStatus::Complete {
                    length: self.line.chars().count() as u32,
                    terminator: keycode,
                };
            }
            Some(Keycode::Delete) => {
                self.line.pop();
            }
            Some(_) => {}
            None => {
                if let Some(ch) = char::from_u32(keycode).filter(|c| !c.is_control()) {
                    if self.line.chars().count() < self.max_len {
                        self.line.push(ch);
                    }
                }
            }
        }
        LineStatus::Editing
    }

    fn char_delivered(&mut self, window: WindowId) {
        if window == self.id {
            self.request = None;
        }
    }

    fn window_at(&self, x: u32, y: u32) -> Option<WindowId> {
        (x < self.bounds.0 && y < self.bounds.1).then_some(self.id)
    }

    fn pointer_interest(&self, window: WindowId) -> PointerInterest {
        if window == self.id { self.pointer } else { PointerInterest::None }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> BasicWindow {
        BasicWindow::new(WindowId(1), 640, 480)
    }

    #[test]
    fn no_request_by_default() {
        let win = window();
        assert_eq!(win.input_request(WindowId(1)), None);
        assert_eq!(win.input_request(WindowId(2)), None);
    }

    #[test]
    fn line_editing_completes_on_return() {
        let mut win = window();
        win.request_line(10);

        for ch in "look".chars() {
            assert_eq!(win.edit_line(WindowId(1), ch as u32), LineStatus::Editing);
        }
        let status = win.edit_line(WindowId(1), Keycode::Return.into());

        assert_eq!(status, LineStatus::Complete { length: 4, terminator: 0 });
        assert_eq!(win.line(), "look");
        assert_eq!(win.input_request(WindowId(1)), None, "line request is one-shot");
    }

    #[test]
    fn delete_removes_last_char() {
        let mut win = window();
        win.request_line(10);
        win.edit_line(WindowId(1), 'n' as u32);
        win.edit_line(WindowId(1), 'x' as u32);
        win.edit_line(WindowId(1), Keycode::Delete.into());
        assert_eq!(win.line(), "n");
    }

    #[test]
    fn line_respects_max_length() {
        let mut win = window();
        win.request_line(2);
        for ch in "abc".chars() {
            win.edit_line(WindowId(1), ch as u32);
        }
        assert_eq!(win.line(), "ab");
    }

    #[test]
    fn terminator_keys_finish_line() {
        let mut win = window();
        win.request_line(10);
        win.set_terminators(&[Keycode::Escape]);
        win.edit_line(WindowId(1), 'q' as u32);

        let status = win.edit_line(WindowId(1), Keycode::Escape.into());
        assert_eq!(
            status,
            LineStatus::Complete { length: 1, terminator: Keycode::Escape.into() }
        );
    }

    #[test]
    fn char_request_is_one_shot() {
        let mut win = window();
        win.request_char();
        assert_eq!(win.input_request(WindowId(1)), Some(InputRequest::Char));
        win.char_delivered(WindowId(1));
        assert_eq!(win.input_request(WindowId(1)), None);
    }

    #[test]
    fn hit_testing_uses_bounds() {
        let mut win = window();
        assert_eq!(win.window_at(10, 10), Some(WindowId(1)));
        assert_eq!(win.window_at(640, 10), None);
        win.resize(800, 600);
        assert_eq!(win.window_at(700, 500), Some(WindowId(1)));
    }

    #[test]
    fn no_windows_drops_everything() {
        let mut layer = NoWindows;
        assert_eq!(layer.focused_window(), None);
        assert_eq!(layer.window_at(0, 0), None);
        assert_eq!(layer.edit_line(WindowId(0), 'a' as u32), LineStatus::Editing);
    }
}
