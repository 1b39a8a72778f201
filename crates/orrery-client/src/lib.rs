//! Client side of the planet metadata service plus the interface state that
//! sits on top of the scene: the body picker, the info panel, the music
//! control and the camera menu.

pub mod audio;
pub mod camera_menu;
pub mod client;
pub mod info_panel;
pub mod picker;

pub use audio::{AudioControl, Interaction};
pub use camera_menu::{CameraAction, CameraMenu, MenuEntry};
pub use client::{ClientError, PlanetClient};
pub use info_panel::{InfoPanel, MISSING_VALUE, PanelState};
pub use picker::{BodyPicker, PickerEntry};
