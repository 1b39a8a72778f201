//! Camera shortcuts: jump to any body, or return to the overview.

use orrery_scene::{BodyKind, SolarSystem};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraAction {
    JumpTo(BodyKind),
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub action: CameraAction,
}

#[derive(Clone, Debug)]
pub struct CameraMenu {
    entries: Vec<MenuEntry>,
}

impl Default for CameraMenu {
    fn default() -> Self {
        Self::new(BodyKind::ALL)
    }
}

impl CameraMenu {
    /// A menu with one "Jump to" entry per body followed by "Reset Camera".
    pub fn new(bodies: impl IntoIterator<Item = BodyKind>) -> Self {
        let mut entries: Vec<MenuEntry> = bodies
            .into_iter()
            .map(|kind| MenuEntry {
                label: format!("Jump to {kind}"),
                action: CameraAction::JumpTo(kind),
            })
            .collect();
        entries.push(MenuEntry {
            label: "Reset Camera".to_string(),
            action: CameraAction::Reset,
        });
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Run an action against the scene.
    pub fn apply(action: CameraAction, system: &mut SolarSystem) {
        match action {
            CameraAction::JumpTo(kind) => system.jump_to(kind),
            CameraAction::Reset => system.reset_camera(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_scene::PerspectiveCamera;

    #[test]
    fn test_labels() {
        let menu = CameraMenu::default();
        assert_eq!(menu.entries().len(), BodyKind::ALL.len() + 1);
        assert_eq!(menu.entries()[0].label, "Jump to Sun");
        let last = menu.entries().last().unwrap();
        assert_eq!(last.label, "Reset Camera");
        assert_eq!(last.action, CameraAction::Reset);
    }

    #[test]
    fn test_jump_follows_body_position() {
        let mut system = SolarSystem::new(1280, 720);
        system.advance(10_000.0);
        CameraMenu::apply(CameraAction::JumpTo(BodyKind::Mars), &mut system);
        assert_eq!(system.camera().target, system.body_position(BodyKind::Mars));

        CameraMenu::apply(CameraAction::Reset, &mut system);
        assert_eq!(system.camera().position, PerspectiveCamera::HOME_POSITION);
    }
}
