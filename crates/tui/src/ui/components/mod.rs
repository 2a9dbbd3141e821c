//! UI components: header, controls, shade rows, hints and toast.

pub mod common;
pub mod component;
pub mod controls;
pub mod header;
pub mod hint_bar;
pub mod shade_row;
pub mod toast;

pub use component::*;
pub use controls::ControlsComponent;
pub use header::HeaderComponent;
pub use hint_bar::HintBarComponent;
pub use shade_row::ShadeRowComponent;
pub use toast::ToastComponent;
