//! Owner-side submission services
//!
//! One service per publication kind. Every mutation runs the ownership
//! guard and the editability check before touching the row; creation
//! always records the acting owner and starts the record at SUBMITTED.

mod book_chapters;
mod books;
mod conferences;
mod journals;
mod patents;

pub use book_chapters::BookChapterSubmissions;
pub use books::BookSubmissions;
pub use conferences::ConferenceSubmissions;
pub use journals::JournalSubmissions;
pub use patents::PatentSubmissions;
