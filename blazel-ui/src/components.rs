pub mod adapters;
pub mod customers;
pub mod drafts;
pub mod editor;
pub mod landing;
pub mod styles;
pub mod training;

pub use adapters::AdaptersTab;
pub use customers::CustomerPicker;
pub use drafts::DraftsTab;
pub use editor::EditorPane;
pub use landing::Landing;
pub use styles::APP_STYLES;
pub use training::TrainingTab;
