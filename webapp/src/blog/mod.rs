// blog listing and single post pages
//
// posts live in the cms rather than the backend, so everything here goes
// through Content::cms

pub mod detail;
pub mod list;

pub use detail::BlogDetail;
pub use list::BlogList;
