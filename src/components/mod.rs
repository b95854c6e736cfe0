pub mod card;
pub mod chart;
pub mod nav;
pub mod segmented_toggle;

pub use segmented_toggle::segmented_toggle;
