pub mod entry_editor;
pub mod share_button;
pub mod tally_board;

pub use entry_editor::EntryEditor;
pub use share_button::ShareButton;
pub use tally_board::TallyBoard;
