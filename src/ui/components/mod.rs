pub mod app;
pub mod post_card;
pub mod results_panel;
pub mod search_form;

pub use app::App;
pub use post_card::PostCard;
pub use results_panel::ResultsPanel;
pub use search_form::SearchForm;
