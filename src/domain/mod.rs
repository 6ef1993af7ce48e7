pub mod knowledge;
pub mod lawyer;
pub mod map;
pub mod record;
pub mod status_style;
pub mod view;
pub mod wizard;
