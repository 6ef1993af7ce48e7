pub mod about;
pub mod home;
pub mod knowledge_base;
pub mod lawyers;
pub mod public_board;
pub mod report;
pub mod success_stories;

pub use about::about_page;
pub use home::home_page;
pub use knowledge_base::{knowledge_base_page, KnowledgeVm};
pub use lawyers::lawyers_page;
pub use public_board::{public_board_page, BoardView, BoardVm};
pub use report::{report_page, ReportVm};
pub use success_stories::{success_stories_page, StoriesVm, StoryLayout};
