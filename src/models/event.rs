use tui_textarea::Input;

#[derive(Debug)]
pub enum Event {
    KeyboardCharInput(Input),
    KeyboardEsc,
    KeyboardEnter,
    KeyboardCtrlC,
    KeyboardPaste(String),

    UiTick,
    UiScrollUp,
    UiScrollDown,
}
