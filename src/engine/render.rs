// Draw command types and the render target seam
//
// The runtime never touches pixel buffers: each render pass emits a
// sequence of draw commands into a host-provided sink, which performs
// the actual blits.

use glam::IVec2;

use super::assets::SpriteId;

/// Reference to what a draw command should blit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteRef {
    /// A resolved sprite handle
    Image(SpriteId),
    /// Diagnostic placeholder for a sprite that failed to resolve
    ///
    /// Hosts should draw this visibly (e.g. a magenta quad) so missing
    /// assets are noticed instead of rendering nothing.
    Placeholder,
}

impl SpriteRef {
    /// Check whether this reference resolved to a real sprite
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Image(_))
    }
}

/// A single blit request in screen space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    /// Top-left corner of the destination, in pixels
    pub position: IVec2,
    /// What to draw there
    pub sprite: SpriteRef,
}

impl DrawCommand {
    /// Create a draw command at the given screen position
    pub fn new(position: IVec2, sprite: SpriteRef) -> Self {
        Self { position, sprite }
    }
}

/// Sink for one render pass worth of draw commands
///
/// Implemented by the host's renderer; the runtime only issues commands.
pub trait RenderTarget {
    /// Accept one draw command
    fn submit(&mut self, command: DrawCommand);
}

/// Collecting target, used by tests and headless hosts
impl RenderTarget for Vec<DrawCommand> {
    fn submit(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_ref_resolution() {
        let image = SpriteRef::Image(SpriteId::from_path("player/down.png"));
        assert!(image.is_resolved());
        assert!(!SpriteRef::Placeholder.is_resolved());
    }

    #[test]
    fn test_vec_collects_commands() {
        let mut target: Vec<DrawCommand> = Vec::new();
        target.submit(DrawCommand::new(IVec2::new(0, 0), SpriteRef::Placeholder));
        target.submit(DrawCommand::new(IVec2::new(48, 0), SpriteRef::Placeholder));

        assert_eq!(target.len(), 2);
        assert_eq!(target[1].position, IVec2::new(48, 0));
    }
}
